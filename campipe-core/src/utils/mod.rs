//! General utilities for the campipe core layer.
//!
//! - [`fs`]: filesystem helpers used when preparing log and config locations.
//! - [`paths`]: XDG and application-specific directory resolution.

pub mod fs;
pub mod paths;

pub use fs::ensure_dir_exists;
