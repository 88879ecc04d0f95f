//! # API Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SHOPCART_BIND_ADDR=127.0.0.1                                       │
//! │     SHOPCART_PORT=9000                                                 │
//! │     SHOPCART_LOG_LEVEL=debug                                           │
//! │     SHOPCART_VALIDATION=strict                                         │
//! │                                                                         │
//! │  2. TOML Config File (path from SHOPCART_CONFIG)                       │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     0.0.0.0:8080, info, lenient                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! bind_addr = "127.0.0.1"
//! port = 8080
//! log_level = "info"
//! validation = "lenient"  # lenient | strict
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use shopcart_core::ValidationPolicy;
use tracing::{debug, info};

/// Environment variable naming the TOML config file.
pub const CONFIG_PATH_ENV: &str = "SHOPCART_CONFIG";

/// API server configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiConfig {
    /// Bind address (default: 0.0.0.0 for all interfaces).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,

    /// HTTP port.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Default tracing filter, used when RUST_LOG is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Validation applied to added items.
    #[serde(default)]
    pub validation: ValidationPolicy,
}

fn default_bind_addr() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            bind_addr: default_bind_addr(),
            port: default_port(),
            log_level: default_log_level(),
            validation: ValidationPolicy::default(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file, if `config_path` is given and exists
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) if path.exists() => Self::from_file(&path)?,
            Some(path) => {
                debug!(?path, "Config file not found, using defaults");
                Self::default()
            }
            None => Self::default(),
        };

        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;

        Ok(config)
    }

    /// Parses a TOML config file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        info!(?path, "Loading config from file");
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Ok(toml::from_str(&contents)?)
    }

    /// Applies `SHOPCART_*` overrides looked up through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(addr) = lookup("SHOPCART_BIND_ADDR") {
            debug!(addr = %addr, "Overriding bind address from environment");
            self.bind_addr = addr;
        }

        if let Some(port) = lookup("SHOPCART_PORT") {
            self.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHOPCART_PORT".to_string()))?;
        }

        if let Some(level) = lookup("SHOPCART_LOG_LEVEL") {
            self.log_level = level;
        }

        if let Some(policy) = lookup("SHOPCART_VALIDATION") {
            self.validation = policy
                .parse()
                .map_err(|_| ConfigError::InvalidValue("SHOPCART_VALIDATION".to_string()))?;
        }

        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bind_addr.trim().is_empty() {
            return Err(ConfigError::MissingRequired("bind_addr".to_string()));
        }

        if self.log_level.trim().is_empty() {
            return Err(ConfigError::MissingRequired("log_level".to_string()));
        }

        Ok(())
    }

    /// Returns the full bind address.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Failed to read config file {path}: {reason}")]
    ReadFailed { path: String, reason: String },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = ApiConfig::default();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.validation, ValidationPolicy::Lenient);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_overrides() {
        let mut config = ApiConfig::default();
        config
            .apply_overrides(lookup_from(&[
                ("SHOPCART_BIND_ADDR", "127.0.0.1"),
                ("SHOPCART_PORT", "9000"),
                ("SHOPCART_VALIDATION", "strict"),
            ]))
            .unwrap();

        assert_eq!(config.bind_address(), "127.0.0.1:9000");
        assert_eq!(config.validation, ValidationPolicy::Strict);
    }

    #[test]
    fn test_invalid_env_values() {
        let mut config = ApiConfig::default();
        let err = config
            .apply_overrides(lookup_from(&[("SHOPCART_PORT", "eighty")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHOPCART_PORT");

        let err = config
            .apply_overrides(lookup_from(&[("SHOPCART_VALIDATION", "paranoid")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue(_)));
    }

    #[test]
    fn test_load_from_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9100\nvalidation = \"strict\"").unwrap();

        let config = ApiConfig::from_file(file.path()).unwrap();

        assert_eq!(config.port, 9100);
        assert_eq!(config.validation, ValidationPolicy::Strict);
        assert_eq!(config.bind_addr, "0.0.0.0");
    }

    #[test]
    fn test_invalid_toml_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = \"not a number\"").unwrap();

        let err = ApiConfig::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_validate_rejects_empty_bind_addr() {
        let config = ApiConfig {
            bind_addr: " ".to_string(),
            ..ApiConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired(_))
        ));
    }
}
