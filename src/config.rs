//! Configuration management for Contact Vault.
//!
//! This module handles loading and validating configuration from environment variables.
//! A `.env` file in the working directory is honoured if present.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Configuration for the Contact Vault binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address book file loaded on startup and used as the default
    /// export/import target (optional)
    pub data_file: Option<PathBuf>,

    /// Export to `data_file` when the session ends (default: false)
    pub autosave: bool,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_VAULT_FILE`: Address book file path
    /// - `CONTACT_VAULT_AUTOSAVE`: Save to the file on exit (default: false)
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // Try to load .env file if it exists (but don't fail if it doesn't)
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CONTACT_VAULT_FILE") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "CONTACT_VAULT_FILE".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => Some(PathBuf::from(val.trim())),
            Err(_) => None,
        };

        let autosave = Self::parse_env_bool("CONTACT_VAULT_AUTOSAVE", false)?;

        if autosave && data_file.is_none() {
            return Err(ConfigError::Other(
                "CONTACT_VAULT_AUTOSAVE requires CONTACT_VAULT_FILE".to_string(),
            ));
        }

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Ok(Config {
            data_file,
            autosave,
            log_level,
        })
    }

    /// Parse an environment variable as a boolean with a default value.
    fn parse_env_bool(var_name: &str, default: bool) -> ConfigResult<bool> {
        match env::var(var_name) {
            Ok(val) => match val.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => Ok(true),
                "0" | "false" | "no" | "off" => Ok(false),
                _ => Err(ConfigError::InvalidValue {
                    var: var_name.to_string(),
                    reason: format!("Must be true or false, got: {}", val),
                }),
            },
            Err(_) => Ok(default),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: None,
            autosave: false,
            log_level: "warn".to_string(),
        }
    }
}
