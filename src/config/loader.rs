use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

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

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// `~/.config/country-search/config.toml` on Linux, the platform
    /// equivalent elsewhere. Falls back to the current directory.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("country-search").join("config.toml")
    }

    /// Loads configuration from `path`.
    ///
    /// A missing file yields `Config::default()`. An existing file is parsed
    /// as TOML and validated.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
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

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The catalog URL is http(s)
    /// - Timeouts are non-zero
    /// - At least one display-name candidate is configured
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.catalog.url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::ValidationError {
                message: format!("Catalog url '{}' must start with http:// or https://", url),
            });
        }

        if self.catalog.timeout_seconds == 0 || self.catalog.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Catalog timeouts must be greater than zero".to_string(),
            });
        }

        if self.fields.display_name.iter().all(|key| key.trim().is_empty()) {
            return Err(ConfigError::ValidationError {
                message: "At least one display_name field candidate must be configured"
                    .to_string(),
            });
        }

        Ok(())
    }
}
