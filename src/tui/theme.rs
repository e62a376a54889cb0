//! Theme and styling definitions
//!
//! Centralizes color choices for the tree view. Status colors can be
//! overridden from the config file with CSS color strings; anything that
//! fails to parse falls back to the built-in default.

use ratatui::style::{Color, Modifier, Style};

use crate::config::StatusColors;
use crate::tree::HealthStatus;

/// Theme configuration for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    // Status colors
    pub status_healthy: Color,
    pub status_degraded: Color,
    pub status_progressing: Color,
    pub status_missing: Color,
    pub status_suspended: Color,
    pub status_unknown: Color,

    // Chrome
    pub header_context: Color,
    pub header_namespace: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub selected_bg: Color,
    pub footer_key: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            status_healthy: Color::Green,
            status_degraded: Color::Red,
            status_progressing: Color::Yellow,
            status_missing: Color::Magenta,
            status_suspended: Color::Gray,
            status_unknown: Color::DarkGray,

            header_context: Color::Yellow,
            header_namespace: Color::Cyan,
            text_primary: Color::White,
            text_secondary: Color::Gray,
            selected_bg: Color::DarkGray,
            footer_key: Color::Yellow,
        }
    }
}

/// Parse a CSS color string into a terminal color
///
/// Returns None when the string does not parse, so callers can keep the
/// built-in default.
fn parse_color(value: &str) -> Option<Color> {
    let parsed = csscolorparser::parse(value).ok()?;
    let [r, g, b, _] = parsed.to_rgba8();
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Build the theme, applying configured status color overrides
    pub fn from_colors(colors: &StatusColors) -> Self {
        let mut theme = Self::default();
        if let Some(color) = colors.healthy.as_deref().and_then(parse_color) {
            theme.status_healthy = color;
        }
        if let Some(color) = colors.degraded.as_deref().and_then(parse_color) {
            theme.status_degraded = color;
        }
        if let Some(color) = colors.progressing.as_deref().and_then(parse_color) {
            theme.status_progressing = color;
        }
        if let Some(color) = colors.missing.as_deref().and_then(parse_color) {
            theme.status_missing = color;
        }
        if let Some(color) = colors.suspended.as_deref().and_then(parse_color) {
            theme.status_suspended = color;
        }
        if let Some(color) = colors.unknown.as_deref().and_then(parse_color) {
            theme.status_unknown = color;
        }
        theme
    }

    /// Color for an arbitrary status string
    pub fn color_for(&self, status: &str) -> Color {
        match HealthStatus::parse(status) {
            Some(HealthStatus::Healthy) => self.status_healthy,
            Some(HealthStatus::Degraded) => self.status_degraded,
            Some(HealthStatus::Progressing) => self.status_progressing,
            Some(HealthStatus::Missing) => self.status_missing,
            Some(HealthStatus::Suspended) => self.status_suspended,
            Some(HealthStatus::Unknown) => self.status_unknown,
            None => self.text_secondary,
        }
    }

    pub fn status_style(&self, status: &str) -> Style {
        Style::default().fg(self.color_for(status))
    }

    pub fn header_context_style(&self) -> Style {
        Style::default()
            .fg(self.header_context)
            .add_modifier(Modifier::BOLD)
    }

    pub fn selected_style(&self) -> Style {
        Style::default()
            .bg(self.selected_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn footer_key_style(&self) -> Style {
        Style::default()
            .fg(self.footer_key)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_status_colors() {
        let theme = Theme::default();
        assert_eq!(theme.color_for("healthy"), Color::Green);
        assert_eq!(theme.color_for("Degraded"), Color::Red);
        assert_eq!(theme.color_for("weird"), theme.text_secondary);
    }

    #[test]
    fn test_config_override_applies() {
        let colors = StatusColors {
            degraded: Some("#102030".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_colors(&colors);
        assert_eq!(theme.status_degraded, Color::Rgb(0x10, 0x20, 0x30));
        // Unset entries keep the defaults
        assert_eq!(theme.status_healthy, Color::Green);
    }

    #[test]
    fn test_unparseable_override_falls_back() {
        let colors = StatusColors {
            healthy: Some("not-a-color".to_string()),
            ..Default::default()
        };
        let theme = Theme::from_colors(&colors);
        assert_eq!(theme.status_healthy, Color::Green);
    }
}
