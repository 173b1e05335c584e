//! Configuration management for the contact manager.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honored when present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::Path;

/// Log levels accepted by `LOG_LEVEL`.
const LOG_LEVELS: [&str; 6] = ["trace", "debug", "info", "warn", "error", "off"];

/// Configuration for the contact manager.
#[derive(Debug, Clone)]
pub struct Config {
    /// Number of contacts to pre-allocate room for (default: 16)
    pub initial_capacity: usize,

    /// Log level (default: "error")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_MANAGER_INITIAL_CAPACITY`: Pre-allocated contact slots (default: 16)
    /// - `LOG_LEVEL`: Logging level (default: "error")
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::DotenvError` if a `.env` file exists but cannot be
    /// parsed, and `ConfigError::InvalidValue` if a variable is set to an
    /// unusable value.
    pub fn from_env() -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::dotenv().map(|_| ()))?;
        Self::from_vars()
    }

    /// Load configuration after reading the dotenv file at `path`.
    ///
    /// # Errors
    ///
    /// Same as [`from_env`](Self::from_env).
    pub fn from_env_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::check_dotenv(dotenvy::from_path(path.as_ref()))?;
        Self::from_vars()
    }

    // A missing .env file is fine; a broken one is not
    fn check_dotenv(loaded: Result<(), dotenvy::Error>) -> ConfigResult<()> {
        match loaded {
            Err(e) if !e.not_found() => Err(ConfigError::DotenvError(e.to_string())),
            _ => Ok(()),
        }
    }

    fn from_vars() -> ConfigResult<Self> {
        let initial_capacity = Self::parse_env_usize("CONTACT_MANAGER_INITIAL_CAPACITY", 16)?;
        let log_level = Self::parse_log_level("LOG_LEVEL", "error")?;

        Ok(Config {
            initial_capacity,
            log_level,
        })
    }

    /// Parse an environment variable as usize with a default value.
    fn parse_env_usize(var_name: &str, default: usize) -> ConfigResult<usize> {
        match env::var(var_name) {
            Ok(val) => val.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be a non-negative integer, got: {}", val),
            }),
            Err(_) => Ok(default),
        }
    }

    /// Parse an environment variable as a log level with a default value.
    fn parse_log_level(var_name: &str, default: &str) -> ConfigResult<String> {
        let level = match env::var(var_name) {
            Ok(val) => val.trim().to_ascii_lowercase(),
            Err(_) => return Ok(default.to_string()),
        };

        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join(", "), level),
            });
        }

        Ok(level)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            initial_capacity: 16,
            log_level: "error".to_string(),
        }
    }
}
