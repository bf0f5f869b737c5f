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
    /// Uses `~/.config/waifu-viewer/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("waifu-viewer").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - Otherwise parses it as TOML and validates; missing keys take
    ///   their defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
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
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Both base URLs are absolute http(s) URLs
    /// - Timeouts are non-zero
    /// - Page size is non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, url) in [
            ("api.waifu_base_url", &self.api.waifu_base_url),
            ("api.login_base_url", &self.api.login_base_url),
        ] {
            match reqwest::Url::parse(url) {
                Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => {}
                Ok(parsed) => {
                    return Err(ConfigError::ValidationError {
                        message: format!("{} has unsupported scheme '{}'", key, parsed.scheme()),
                    })
                }
                Err(e) => {
                    return Err(ConfigError::ValidationError {
                        message: format!("{} is not a valid URL ('{}'): {}", key, url, e),
                    })
                }
            }
        }

        if self.api.timeout_seconds == 0 || self.api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "Timeouts must be greater than zero".to_string(),
            });
        }

        if self.home.page_size == 0 {
            return Err(ConfigError::ValidationError {
                message: "home.page_size must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LoginMode;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.api.waifu_base_url, "https://api.waifu.im/");
        assert_eq!(config.api.timeout_seconds, 15);
        assert_eq!(config.splash.delay_ms, 2000);
        assert_eq!(config.home.page_size, 10);
        assert_eq!(config.login.mode, LoginMode::Mock);
    }

    #[test]
    fn rejects_non_http_scheme() {
        let mut config = Config::default();
        config.api.waifu_base_url = "ftp://example.com/".to_string();
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("unsupported scheme"));
    }

    #[test]
    fn rejects_zero_page_size() {
        let mut config = Config::default();
        config.home.page_size = 0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config: Config = toml::from_str(
            r#"
[home]
page_size = 25

[login]
mode = "remote"
"#,
        )
        .unwrap();
        assert_eq!(config.home.page_size, 25);
        assert_eq!(config.login.mode, LoginMode::Remote);
        assert_eq!(config.login.mock_delay_ms, 1000);
        assert_eq!(config.api, crate::config::ApiConfig::default());
    }
}
