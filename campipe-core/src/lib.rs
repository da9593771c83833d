//! # Campipe Core Library (`campipe-core`)
//!
//! Foundational layer of the campipe image pipeline. Higher-level camera
//! configuration code builds on it for:
//!
//! - **Geometry**: integer [`Point`], [`Size`], [`Rectangle`] and [`SizeRange`]
//!   value types with overflow-safe aspect-ratio fitting, rational scaling,
//!   stepped range containment, intersection and enclosing.
//! - **Error Handling**: [`CoreError`] and the specific [`ConfigError`],
//!   [`LoggingError`] and [`GeometryParseError`].
//! - **Configuration**: TOML configuration through [`ConfigLoader`].
//! - **Logging**: `tracing`-based logging set up from [`LoggingConfig`].
//!
//! ```rust,ignore
//! use campipe_core::{init_logging, ConfigLoader, CoreError, Rectangle, Size};
//!
//! fn main() -> Result<(), CoreError> {
//!     let config = ConfigLoader::load()?;
//!     init_logging(&config.logging, false)?;
//!
//!     let sensor = Size::new(4056, 3040);
//!     let crop = sensor
//!         .bounded_to_aspect_ratio(Size::new(16, 9))
//!         .centered_to(Rectangle::from(sensor).center());
//!     tracing::info!(%sensor, %crop, "Selected sensor crop");
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod types;
pub mod utils;

pub use config::{ConfigLoader, CoreConfig, LoggingConfig};
pub use error::{ConfigError, CoreError, GeometryParseError, LoggingError};
pub use logging::{init_logging, init_minimal_logging};
pub use types::{Point, Rectangle, Size, SizeRange};
