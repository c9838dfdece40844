//! Configuration management for deskcalc

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::logging::LogFormat;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub display: DisplayConfig,
    pub ui: UiSection,
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Show thousands separators on the display (never in the buffer)
    pub group_digits: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSection {
    pub colors: bool,
    pub tick_rate_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    pub format: LogFormat,
    /// Unset means each binary picks its own default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    /// Log file; the terminal app falls back to the data directory
    pub file: Option<String>,
}

impl Default for UiSection {
    fn default() -> Self {
        Self {
            colors: true,
            tick_rate_ms: 100,
        }
    }
}

impl Default for LoggingSection {
    fn default() -> Self {
        Self {
            format: LogFormat::Text,
            level: None,
            file: None,
        }
    }
}

impl LoggingSection {
    /// Log file path with `~` expanded
    pub fn file_path(&self) -> Option<PathBuf> {
        self.file
            .as_deref()
            .map(|path| PathBuf::from(shellexpand::tilde(path).to_string()))
    }
}

impl Config {
    /// Load configuration from the default location.
    ///
    /// A missing file is not an error: the defaults are used.
    pub fn load() -> Result<Self> {
        let config_path = resolve_config_path()?;
        if !config_path.exists() {
            tracing::debug!("No config file at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let config: Config = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        Ok(config)
    }
}

/// Resolve the configuration file path following XDG Base Directory conventions
pub fn resolve_config_path() -> Result<PathBuf> {
    if let Ok(path) = std::env::var("DESKCALC_CONFIG") {
        return Ok(PathBuf::from(shellexpand::tilde(&path).to_string()));
    }

    let config_dir = dirs::config_dir()
        .ok_or_else(|| ConfigError::MissingField("config directory".to_string()))?;

    Ok(config_dir.join("deskcalc").join("config.toml"))
}

/// Resolve the data directory path following XDG Base Directory conventions
pub fn resolve_data_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| ConfigError::MissingField("data directory".to_string()))?;

    Ok(data_dir.join("deskcalc"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeskcalcError;
    use serial_test::serial;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert!(!config.display.group_digits);
        assert!(config.ui.colors);
        assert_eq!(config.ui.tick_rate_ms, 100);
        assert_eq!(config.logging.format, LogFormat::Text);
        assert!(config.logging.level.is_none());
        assert!(config.logging.file.is_none());
    }

    #[test]
    fn test_load_full_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(
            &path,
            r#"
[display]
group_digits = true

[ui]
colors = false
tick_rate_ms = 250

[logging]
format = "json"
level = "debug"
file = "/tmp/deskcalc.log"
"#,
        )
        .unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.display.group_digits);
        assert!(!config.ui.colors);
        assert_eq!(config.ui.tick_rate_ms, 250);
        assert_eq!(config.logging.format, LogFormat::Json);
        assert_eq!(config.logging.level.as_deref(), Some("debug"));
        assert_eq!(config.logging.file_path(), Some(PathBuf::from("/tmp/deskcalc.log")));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[display]\ngroup_digits = true\n").unwrap();

        let config = Config::load_from_path(&path).unwrap();
        assert!(config.display.group_digits);
        assert_eq!(config.ui, UiSection::default());
        assert_eq!(config.logging, LoggingSection::default());
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[ui]\ntick_rate_ms = \"fast\"\n").unwrap();

        let err = Config::load_from_path(&path).unwrap_err();
        assert!(matches!(err, DeskcalcError::Config(ConfigError::ParseError(_))));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = Config::load_from_path(&temp_dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, DeskcalcError::Config(ConfigError::ReadError(_))));
    }

    #[test]
    #[serial]
    fn test_env_override_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("custom.toml");
        fs::write(&path, "[ui]\ncolors = false\n").unwrap();

        std::env::set_var("DESKCALC_CONFIG", &path);
        let resolved = resolve_config_path();
        let loaded = Config::load();
        std::env::remove_var("DESKCALC_CONFIG");

        assert_eq!(resolved.unwrap(), path);
        assert!(!loaded.unwrap().ui.colors);
    }

    #[test]
    #[serial]
    fn test_load_without_file_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        std::env::set_var("DESKCALC_CONFIG", temp_dir.path().join("absent.toml"));
        let loaded = Config::load();
        std::env::remove_var("DESKCALC_CONFIG");

        assert_eq!(loaded.unwrap(), Config::default());
    }
}
