//! Configuration data model.
//!
//! All structs derive `Serialize`/`Deserialize` for TOML persistence.
//! Every field has a default so the application works with no file present.
//! The only user data persisted is the `theme` entry; everything else is
//! operational configuration.

use crate::ui::theme::ThemeName;
use serde::{Deserialize, Serialize};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Last chosen theme, written on every switch and restored at startup.
    #[serde(default)]
    pub theme: ThemeName,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// When false, no log file is opened at all.
    #[serde(default)]
    pub enabled: bool,
    /// Default filter when `RUST_LOG` is not set, e.g. "info" or "pagelab=debug".
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
        assert!(!config.logging.enabled);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_theme_round_trip() {
        let mut config = AppConfig::default();
        config.theme = ThemeName::Blue;
        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("theme = \"blue\""));
        let back: AppConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.theme, ThemeName::Blue);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config: AppConfig = toml::from_str("theme = \"sepia\"").unwrap();
        assert_eq!(config.theme, ThemeName::Dark);
    }
}
