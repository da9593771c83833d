//! Core data types shared across the campipe pipeline.
//!
//! - **Geometry**: [`Point`], [`Size`], [`Rectangle`] and [`SizeRange`], the
//!   integer primitives used for pixel coordinates, frame dimensions, sensor
//!   capability ranges and crop/scale windows.

pub mod geometry;

pub use geometry::{Point, Rectangle, Size, SizeRange};
