use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Upper bound the search endpoint accepts for `per_page`.
const MAX_PER_PAGE: u32 = 30;

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
    /// Uses `~/.config/photo-search/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("photo-search").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
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

        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - The API base URL parses as an absolute URL
    /// - The loading window is not inverted
    /// - `per_page`, when set, lies in `1..=30`
    /// - The UI tick rate is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        if reqwest::Url::parse(&self.api.base_url).is_err() {
            return Err(ConfigError::ValidationError {
                message: format!("Invalid api.base_url '{}'", self.api.base_url),
            });
        }

        if self.loading.max_visible_ms < self.loading.min_visible_ms {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "loading.max_visible_ms ({}) is less than loading.min_visible_ms ({})",
                    self.loading.max_visible_ms, self.loading.min_visible_ms
                ),
            });
        }

        if let Some(per_page) = self.api.per_page {
            if per_page == 0 || per_page > MAX_PER_PAGE {
                return Err(ConfigError::ValidationError {
                    message: format!(
                        "api.per_page must be between 1 and {}, got {}",
                        MAX_PER_PAGE, per_page
                    ),
                });
            }
        }

        if self.ui.tick_rate_ms == 0 {
            return Err(ConfigError::ValidationError {
                message: "ui.tick_rate_ms must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}
