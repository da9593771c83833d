//! Error handling for the campipe core layer.
//!
//! Error types are defined with `thiserror`. The crate-wide error is
//! [`CoreError`], which wraps the more specific [`ConfigError`],
//! [`LoggingError`] and [`GeometryParseError`].
//!
//! Geometry arithmetic itself has no error channel: its preconditions are
//! debug assertions. Only parsing the textual geometry forms can fail.
//!
//! # Examples
//!
//! ```
//! use campipe_core::error::CoreError;
//! use campipe_core::types::geometry::Size;
//!
//! fn sensor_size(text: &str) -> Result<Size, CoreError> {
//!     Ok(text.parse::<Size>()?)
//! }
//!
//! assert_eq!(sensor_size("4056x3040").unwrap(), Size::new(4056, 3040));
//! assert!(matches!(sensor_size("4056"), Err(CoreError::Geometry(_))));
//! ```

use std::io;
use std::num::ParseIntError;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for the campipe pipeline.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Errors related to configuration loading, parsing, or validation.
    #[error("Configuration Error: {0}")]
    Config(#[from] ConfigError),

    /// Errors raised while setting up the logging system.
    #[error("Logging Error: {0}")]
    Logging(#[from] LoggingError),

    /// A textual geometry value could not be parsed.
    #[error("Geometry Error: {0}")]
    Geometry(#[from] GeometryParseError),

    /// Filesystem operations, such as creating a log directory, that failed.
    #[error("Filesystem Error: {message} (Path: {path:?})")]
    Filesystem {
        message: String,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Invalid input provided to a function or method.
    #[error("Invalid Input: {0}")]
    InvalidInput(String),
}

/// Error type for configuration-related operations.
///
/// Typically wrapped by [`CoreError::Config`].
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file exists but could not be read.
    #[error("Failed to read configuration file from {path:?}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid TOML or does not match the schema.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds invalid values.
    #[error("Configuration validation failed: {0}")]
    ValidationError(String),

    /// A required base directory (config or state) could not be determined.
    #[error("Could not determine base directory for {dir_type}")]
    DirectoryUnavailable { dir_type: String },
}

/// Error type for logging-related operations.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The global subscriber could not be installed or the configuration was
    /// unusable.
    #[error("Failed to initialize logging: {0}")]
    InitializationFailure(String),

    /// A log filter directive could not be parsed.
    #[error("Failed to set log filter: {0}")]
    FilterError(String),
}

/// Error returned when parsing the textual form of a geometry value fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeometryParseError {
    /// The input does not have the shape of the expected textual form.
    #[error("malformed {kind}: {input:?}")]
    Malformed { kind: &'static str, input: String },

    /// The shape matched but a numeric component is not a valid integer.
    #[error("invalid number in {kind} {input:?}")]
    InvalidNumber {
        kind: &'static str,
        input: String,
        #[source]
        source: ParseIntError,
    },
}

impl GeometryParseError {
    pub(crate) fn malformed(kind: &'static str, input: &str) -> Self {
        GeometryParseError::Malformed {
            kind,
            input: input.to_string(),
        }
    }
}
