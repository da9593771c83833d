//! Logging for the campipe core layer.
//!
//! Built on the `tracing` ecosystem: a console layer on stdout and an optional
//! daily-rolling file layer, each in text or JSON. Geometry values implement
//! `Display`, so call sites log them as fields:
//!
//! ```rust,ignore
//! tracing::debug!(crop = %crop, sensor = %sensor_size, "Applying crop");
//! ```

use crate::config::LoggingConfig;
use crate::error::{CoreError, LoggingError};
use crate::utils::fs::ensure_dir_exists;

use once_cell::sync::Lazy;
use std::io::stdout;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry,
};

type BoxedLayer = Box<dyn Layer<Registry> + Send + Sync + 'static>;

/// Keeps the file writer's guard alive so buffered lines are flushed.
static LOG_WORKER_GUARD: Lazy<Mutex<Option<WorkerGuard>>> = Lazy::new(|| Mutex::new(None));

/// Initializes a minimal stderr logger filtered by `RUST_LOG` (default
/// "info").
///
/// Meant for tests and early startup. An already installed global subscriber
/// is left in place.
pub fn init_minimal_logging() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(Level::INFO.to_string()));

    let _ = fmt::Subscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .try_init();
}

/// Parses a configured level name into a filter directive.
fn level_directive(level: &str) -> Result<String, LoggingError> {
    let level = match level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        invalid_level => {
            return Err(LoggingError::FilterError(format!(
                "Invalid log level in config: {}",
                invalid_level
            )));
        }
    };
    Ok(level.to_string())
}

/// Creates the file layer and its worker guard. The parent directory is
/// created if needed.
fn create_file_layer(log_path: &Path, format: &str) -> Result<(BoxedLayer, WorkerGuard), CoreError> {
    let directory = match log_path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    ensure_dir_exists(directory)?;

    let file_name = log_path
        .file_name()
        .ok_or_else(|| CoreError::InvalidInput(format!("Log path has no file name: {:?}", log_path)))?;

    let file_appender = tracing_appender::rolling::daily(directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let layer = match format.to_lowercase().as_str() {
        "json" => fmt::layer().json().with_writer(writer).with_ansi(false).boxed(),
        _ => fmt::layer().with_writer(writer).with_ansi(false).boxed(),
    };
    Ok((layer, guard))
}

/// Installs the global subscriber described by `config`.
///
/// With `is_reload` set, failing to replace an existing subscriber is
/// reported as a warning on stderr instead of an error. The subscriber
/// already installed, including its file writer, keeps running.
///
/// # Errors
///
/// [`LoggingError::FilterError`] for an unknown level,
/// [`CoreError::Filesystem`] if the log directory cannot be created, and
/// [`LoggingError::InitializationFailure`] if a subscriber is already set on
/// first initialization.
pub fn init_logging(config: &LoggingConfig, is_reload: bool) -> Result<(), CoreError> {
    let directive = level_directive(&config.level)?;

    let stdout_layer = match config.format.to_lowercase().as_str() {
        "json" => fmt::layer()
            .json()
            .with_writer(stdout)
            .with_ansi(false)
            .with_filter(EnvFilter::new(&directive))
            .boxed(),
        _ => fmt::layer()
            .with_writer(stdout)
            .with_ansi(atty::is(atty::Stream::Stdout))
            .with_filter(EnvFilter::new(&directive))
            .boxed(),
    };

    let mut layers: Vec<BoxedLayer> = vec![stdout_layer];
    let mut new_guard = None;
    if let Some(log_path) = &config.file_path {
        let (file_layer, guard) = create_file_layer(log_path, &config.format)?;
        layers.push(file_layer.with_filter(EnvFilter::new(&directive)).boxed());
        new_guard = Some(guard);
    }

    let result = Registry::default().with(layers).try_init();

    // The previous guard belongs to the file writer of the installed
    // subscriber, so it is only swapped out once ours is installed.
    if result.is_ok() {
        match LOG_WORKER_GUARD.lock() {
            Ok(mut slot) => *slot = new_guard,
            Err(e) => eprintln!("[ERROR] Failed to lock LOG_WORKER_GUARD: {}. Log flushing may be affected.", e),
        }
    }

    match result {
        Ok(()) => {
            tracing::info!(level = %config.level, format = %config.format, "Logging initialized");
            Ok(())
        }
        Err(e) if is_reload => {
            eprintln!("[WARN] Logging reload kept the previous subscriber: {}", e);
            Ok(())
        }
        Err(e) => Err(LoggingError::InitializationFailure(format!(
            "Failed to set global tracing subscriber. Was it already initialized? Error: {}",
            e
        ))
        .into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_level_directive_accepts_known_levels() {
        assert_eq!(level_directive("TRACE").unwrap(), "TRACE");
        assert_eq!(level_directive("warn").unwrap(), "WARN");
        assert!(matches!(level_directive("loud"), Err(LoggingError::FilterError(_))));
    }

    #[test]
    fn test_init_minimal_logging_runs_twice_without_panic() {
        init_minimal_logging();
        init_minimal_logging();
        tracing::info!("Minimal logging test message");
    }

    #[test]
    fn test_create_file_layer_text_and_json() {
        let temp_dir = TempDir::new().unwrap();
        for format in ["text", "json"] {
            let log_path = temp_dir.path().join(format).join("campipe.log");
            let result = create_file_layer(&log_path, format);
            assert!(result.is_ok(), "create_file_layer failed for {}: {:?}", format, result.err());
            assert!(log_path.parent().unwrap().is_dir());
        }
    }

    #[test]
    fn test_init_logging_rejects_invalid_level() {
        let config = LoggingConfig {
            level: "verbose".to_string(),
            ..LoggingConfig::default()
        };
        let err = init_logging(&config, false).unwrap_err();
        assert!(matches!(err, CoreError::Logging(LoggingError::FilterError(_))));
    }

    #[test]
    fn test_init_logging_reload_tolerates_existing_subscriber() {
        init_minimal_logging();
        let temp_dir = TempDir::new().unwrap();
        let config = LoggingConfig {
            file_path: Some(temp_dir.path().join("reload.log")),
            ..LoggingConfig::default()
        };
        assert!(init_logging(&config, true).is_ok());
    }
}
