use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable overriding `api.base_url`.
pub const ENV_API_URL: &str = "METROWATCH_API_URL";
/// Environment variable overriding `analytics.measurement_id`.
pub const ENV_GA_ID: &str = "METROWATCH_GA_ID";
/// Environment variable overriding `analytics.api_secret`.
pub const ENV_GA_SECRET: &str = "METROWATCH_GA_SECRET";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

const KNOWN_VIEWS: [&str; 3] = ["map", "dashboard", "activity"];

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/metrowatch/config.toml` on Unix/macOS, or the
    /// platform equivalent via `dirs::config_dir()`. Falls back to the
    /// current directory if no config dir is available.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("metrowatch").join("config.toml")
    }

    /// Loads configuration from the default config file.
    ///
    /// A missing file is not an error; defaults are returned instead.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        Ok(config)
    }

    /// Applies `METROWATCH_*` environment overrides on top of file values.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|name| std::env::var(name).ok());
    }

    fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL) {
            self.api.base_url = url;
        }
        if let Some(id) = lookup(ENV_GA_ID) {
            self.analytics.measurement_id = Some(id);
        }
        if let Some(secret) = lookup(ENV_GA_SECRET) {
            self.analytics.api_secret = Some(secret);
        }
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL is non-empty
    /// - The poll interval is at least one second
    /// - The default view names one of the three views
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if self.api.poll_interval_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api.poll_interval_seconds must be at least 1".to_string(),
            });
        }

        if !KNOWN_VIEWS.contains(&self.ui.default_view.as_str()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "ui.default_view '{}' is not one of map, dashboard, activity",
                    self.ui.default_view
                ),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = Config::load_from(&dir.path().join("nope.toml")).expect("load");
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.api.poll_interval_seconds, 5);
        assert_eq!(config.ui.default_view, "map");
        assert!(!config.analytics.is_configured());
    }

    #[test]
    fn parses_partial_file() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(
            file,
            "[api]\nbase_url = \"http://metro.example:9000\"\npoll_interval_seconds = 2\n\n[ui]\ndefault_view = \"activity\""
        )
        .expect("write");

        let config = Config::load_from(file.path()).expect("load");
        assert_eq!(config.api.base_url, "http://metro.example:9000");
        assert_eq!(config.api.poll_interval_seconds, 2);
        // Untouched sections keep their defaults.
        assert_eq!(config.api.request_timeout_seconds, 10);
        assert_eq!(config.ui.default_view, "activity");
        assert_eq!(config.ui.tick_millis, 250);
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().expect("tempfile");
        writeln!(file, "[api\nbase_url = ").expect("write");

        let err = Config::load_from(file.path()).expect_err("should fail");
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn env_overrides_win_over_file_values() {
        let mut config = Config::default();
        config.api.base_url = "http://from-file:8000".to_string();

        config.apply_overrides_from(|name| match name {
            ENV_API_URL => Some("http://from-env:8000".to_string()),
            ENV_GA_ID => Some("G-TEST123".to_string()),
            ENV_GA_SECRET => Some("s3cret".to_string()),
            _ => None,
        });

        assert_eq!(config.api.base_url, "http://from-env:8000");
        assert_eq!(config.analytics.measurement_id.as_deref(), Some("G-TEST123"));
        assert!(config.analytics.is_configured());
    }

    #[test]
    fn absent_env_changes_nothing() {
        let mut config = Config::default();
        config.apply_overrides_from(|_| None);
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert!(!config.analytics.is_configured());
    }

    #[test]
    fn validation_rejects_empty_url() {
        let mut config = Config::default();
        config.api.base_url = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_zero_interval() {
        let mut config = Config::default();
        config.api.poll_interval_seconds = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_unknown_view() {
        let mut config = Config::default();
        config.ui.default_view = "heatmap".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn default_config_validates() {
        assert!(Config::default().validate().is_ok());
    }
}
