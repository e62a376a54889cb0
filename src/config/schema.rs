//! Configuration schema definitions
//!
//! Defines the structure of configuration files using serde for serialization.

use serde::{Deserialize, Serialize};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Seconds between snapshot refreshes
    #[serde(default = "default_refresh_secs")]
    pub refresh_secs: u64,

    /// Namespace to snapshot when none is given on the command line
    #[serde(default = "default_namespace")]
    pub default_namespace: String,

    /// Label selector applied to every list call
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selector: Option<String>,

    /// UI configuration
    #[serde(default)]
    pub ui: UiConfig,

    /// Logger configuration
    #[serde(default)]
    pub logger: LoggerConfig,
}

/// UI configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UiConfig {
    /// Enable mouse support
    #[serde(default = "default_false")]
    pub enable_mouse: bool,

    /// Hide header
    #[serde(default = "default_false")]
    pub headless: bool,

    /// Status color overrides (CSS color strings)
    #[serde(default)]
    pub colors: StatusColors,
}

/// Per-status color overrides, CSS color syntax
///
/// Unset entries fall back to the built-in theme.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatusColors {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub healthy: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub degraded: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub progressing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub missing: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suspended: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unknown: Option<String>,
}

impl StatusColors {
    /// All set entries as (name, value) pairs, for validation
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        [
            ("healthy", self.healthy.as_deref()),
            ("degraded", self.degraded.as_deref()),
            ("progressing", self.progressing.as_deref()),
            ("missing", self.missing.as_deref()),
            ("suspended", self.suspended.as_deref()),
            ("unknown", self.unknown.as_deref()),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.map(|v| (name, v)))
        .collect()
    }
}

/// Logger configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoggerConfig {
    /// Log level filter used when debug logging is enabled
    #[serde(default = "default_log_level")]
    pub level: String,
}

// Default value functions
fn default_refresh_secs() -> u64 {
    10
}

fn default_namespace() -> String {
    "default".to_string()
}

fn default_false() -> bool {
    false
}

fn default_log_level() -> String {
    "debug".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            refresh_secs: default_refresh_secs(),
            default_namespace: default_namespace(),
            selector: None,
            ui: UiConfig::default(),
            logger: LoggerConfig::default(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            enable_mouse: default_false(),
            headless: default_false(),
            colors: StatusColors::default(),
        }
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.refresh_secs, 10);
        assert_eq!(config.default_namespace, "default");
        assert!(config.selector.is_none());
        assert_eq!(config.logger.level, "debug");
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let yaml = serde_yaml::to_string(&config).unwrap();
        assert!(yaml.contains("refreshSecs"));
        assert!(yaml.contains("defaultNamespace"));
    }

    #[test]
    fn test_config_deserialization() {
        let yaml = r##"
refreshSecs: 30
defaultNamespace: my-ns
selector: app=web
ui:
  colors:
    degraded: "#ff0000"
"##;
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.refresh_secs, 30);
        assert_eq!(config.default_namespace, "my-ns");
        assert_eq!(config.selector.as_deref(), Some("app=web"));
        assert_eq!(config.ui.colors.degraded.as_deref(), Some("#ff0000"));
    }

    #[test]
    fn test_status_colors_entries_skips_unset() {
        let colors = StatusColors {
            healthy: Some("green".to_string()),
            degraded: Some("red".to_string()),
            ..Default::default()
        };
        let entries = colors.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], ("healthy", "green"));
    }
}
