//! Configuration loading.
//!
//! [`ConfigLoader`] reads `config.toml`, falls back to defaults when the file
//! is absent, and validates the result:
//!
//! - the log level must be one of trace, debug, info, warn, error and the
//!   format one of text, json; both are normalised to lower case;
//! - a relative log file path is made absolute against the application state
//!   directory, and the log file's parent directory is created.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::config::CoreConfig;
use crate::error::{ConfigError, CoreError};
use crate::utils::fs::ensure_dir_exists;
use crate::utils::paths::{get_app_config_dir, get_app_state_dir};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Namespace for configuration loading.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `config.toml` from the application configuration directory.
    ///
    /// A missing file yields the default configuration. Any other read
    /// failure, a TOML error or a validation failure is returned.
    pub fn load() -> Result<CoreConfig, CoreError> {
        let path = get_app_config_dir()?.join(CONFIG_FILE_NAME);
        Self::load_from_path(&path)
    }

    /// Loads and validates the configuration at `path`.
    ///
    /// A missing or empty file yields the default configuration.
    pub fn load_from_path(path: &Path) -> Result<CoreConfig, CoreError> {
        match fs::read_to_string(path) {
            Ok(content) => Self::load_from_str(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No configuration file, using defaults");
                Self::load_from_str("")
            }
            Err(e) => Err(CoreError::Config(ConfigError::ReadError {
                path: path.to_path_buf(),
                source: e,
            })),
        }
    }

    /// Parses and validates configuration from TOML text.
    pub fn load_from_str(content: &str) -> Result<CoreConfig, CoreError> {
        let mut config = if content.trim().is_empty() {
            CoreConfig::default()
        } else {
            toml::from_str(content).map_err(ConfigError::ParseError)?
        };

        Self::validate_config(&mut config)?;
        Ok(config)
    }

    fn validate_config(config: &mut CoreConfig) -> Result<(), CoreError> {
        let level = config.logging.level.to_lowercase();
        match level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => config.logging.level = level,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log level: '{}'. Must be one of trace, debug, info, warn, error.",
                    config.logging.level
                ))
                .into());
            }
        }

        let format = config.logging.format.to_lowercase();
        match format.as_str() {
            "text" | "json" => config.logging.format = format,
            _ => {
                return Err(ConfigError::ValidationError(format!(
                    "Invalid log format: '{}'. Must be one of text, json.",
                    config.logging.format
                ))
                .into());
            }
        }

        if let Some(file_path) = &config.logging.file_path {
            let absolute_path = if file_path.is_absolute() {
                file_path.clone()
            } else {
                get_app_state_dir()?.join(file_path)
            };

            if let Some(parent_dir) = absolute_path.parent() {
                ensure_dir_exists(parent_dir)?;
            }
            config.logging.file_path = Some(absolute_path);
        }

        Ok(())
    }
}
