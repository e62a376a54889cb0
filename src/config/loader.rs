//! Configuration loading and merging logic
//!
//! Handles loading configuration from defaults, the config file, and
//! environment overrides, in that precedence order.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{defaults, paths, schema::Config};

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration with all layers merged
    ///
    /// Precedence order (highest to lowest):
    /// 1. Environment variable overrides (TREE9S_*)
    /// 2. Root config file
    /// 3. Built-in defaults
    pub fn load() -> Result<Config> {
        let mut config = Self::load_defaults();

        let root_path = paths::root_config_path();
        if root_path.exists() {
            config = Self::load_file(&root_path)?;
        }

        config = Self::apply_env_overrides(config);
        Self::check_colors(&config)?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load_file(path: &PathBuf) -> Result<Config> {
        if !path.exists() {
            return Err(anyhow::anyhow!("Config file not found: {}", path.display()));
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = serde_yaml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load default configuration
    pub fn load_defaults() -> Config {
        defaults::default_config()
    }

    /// Validate the configuration on disk plus the merged result
    pub fn validate() -> Result<()> {
        let root_path = paths::root_config_path();
        if root_path.exists() {
            let config = Self::load_file(&root_path)?;
            Self::check_colors(&config)?;
            if config.refresh_secs == 0 {
                return Err(anyhow::anyhow!("refreshSecs must be at least 1"));
            }
        }

        let _ = Self::load().context("Failed to load merged configuration")?;
        Ok(())
    }

    /// Check that every configured status color parses as a CSS color
    fn check_colors(config: &Config) -> Result<()> {
        for (name, value) in config.ui.colors.entries() {
            csscolorparser::parse(value)
                .map_err(|e| anyhow::anyhow!("Invalid color for ui.colors.{}: {}", name, e))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut config: Config) -> Config {
        if let Ok(namespace) = std::env::var("TREE9S_DEFAULT_NAMESPACE") {
            config.default_namespace = namespace;
        }

        if let Ok(selector) = std::env::var("TREE9S_SELECTOR") {
            config.selector = if selector.is_empty() {
                None
            } else {
                Some(selector)
            };
        }

        if let Ok(refresh) = std::env::var("TREE9S_REFRESH_SECS") {
            if let Ok(secs) = refresh.parse::<u64>() {
                config.refresh_secs = secs;
            }
        }

        if let Ok(level) = std::env::var("TREE9S_LOG_LEVEL") {
            config.logger.level = level;
        }

        config
    }

    /// Save configuration to a file
    pub fn save(config: &Config, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            paths::ensure_dir(parent)?;
        }

        let yaml =
            serde_yaml::to_string(config).context("Failed to serialize configuration to YAML")?;

        std::fs::write(path, yaml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Save root configuration
    pub fn save_root(config: &Config) -> Result<()> {
        Self::save(config, &paths::root_config_path())
    }
}
