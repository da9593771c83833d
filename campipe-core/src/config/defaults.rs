//! Default configuration values.
//!
//! Used by `serde`'s `default` attribute when a field or section is missing
//! from `config.toml`.

use super::LoggingConfig;
use std::path::PathBuf;

/// Default `[logging]` section.
pub(crate) fn default_logging_config() -> LoggingConfig {
    LoggingConfig {
        level: default_log_level(),
        file_path: default_log_file_path(),
        format: default_log_format(),
    }
}

/// `"info"`.
pub(crate) fn default_log_level() -> String {
    "info".to_string()
}

/// No log file.
pub(crate) fn default_log_file_path() -> Option<PathBuf> {
    None
}

/// `"text"`.
pub(crate) fn default_log_format() -> String {
    "text".to_string()
}
