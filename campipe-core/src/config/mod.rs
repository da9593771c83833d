//! Configuration management for the campipe core layer.
//!
//! - [`types`]: the schema ([`CoreConfig`], [`LoggingConfig`]).
//! - [`defaults`]: default values applied by `serde` for missing fields.
//! - [`loader`]: [`ConfigLoader`], which reads TOML, applies defaults and
//!   validates the result.
//!
//! ```rust,ignore
//! use campipe_core::config::ConfigLoader;
//!
//! match ConfigLoader::load() {
//!     Ok(config) => campipe_core::logging::init_logging(&config.logging, false)?,
//!     Err(e) => {
//!         campipe_core::logging::init_minimal_logging();
//!         tracing::error!("Configuration loading failed: {}", e);
//!     }
//! }
//! ```

pub mod defaults;
pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{CoreConfig, LoggingConfig};
