//! Integer geometry for the image pipeline.
//!
//! Four value types describe pixel coordinates, frame dimensions, sensor
//! capability ranges, and crop/scale windows:
//!
//! - [`Point`]: signed `(x, y)` coordinate.
//! - [`Size`]: unsigned `width x height` extent.
//! - [`Rectangle`]: top-left position plus extent.
//! - [`SizeRange`]: inclusive, optionally stepped range of sizes.
//!
//! All of them are `Copy`, own no resources and perform no I/O. Operations that
//! edit a value come in pairs: an in-place form taking `&mut self` and returning
//! `&mut Self` for chaining (`align_down_to`, `scale_by`, ...), and a pure form
//! returning a new value (`aligned_down_to`, `scaled_by`, ...).
//!
//! Arithmetic that could overflow the 32-bit fields (aspect-ratio cross
//! products, areas, rational scaling, edge coordinates) is carried out in
//! 64 bits.
//!
//! Preconditions such as non-zero alignments, aspect ratios and scale
//! denominators are checked with `debug_assert!` only. The one fallible
//! operation is parsing the textual forms back through [`std::str::FromStr`].
//!
//! ```
//! use campipe_core::types::geometry::{Point, Rectangle, Size, SizeRange};
//!
//! let sensor = Size::new(4056, 3040);
//! let output = sensor.bounded_to_aspect_ratio(Size::new(16, 9)).aligned_down_to(2, 2);
//! assert_eq!(output, Size::new(4056, 2280));
//!
//! let crop = output.centered_to(Point::new(2028, 1520));
//! assert_eq!(crop.to_string(), "(0x380)/4056x2280");
//! assert_eq!(crop.enclosed_in(Rectangle::from(sensor)), crop);
//!
//! let modes = SizeRange::with_steps(Size::new(64, 64), sensor, 2, 2);
//! assert!(modes.contains(output));
//! ```

mod point;
mod rectangle;
mod size;
mod size_range;

pub use point::Point;
pub use rectangle::Rectangle;
pub use size::Size;
pub use size_range::SizeRange;

use std::num::ParseIntError;
use std::str::FromStr;

use crate::error::GeometryParseError;

/// Parses one numeric component of a textual geometry value.
///
/// `Display` never writes a `+` sign, so one is rejected here even though the
/// integer parsers accept it.
fn parse_component<T>(kind: &'static str, input: &str, text: &str) -> Result<T, GeometryParseError>
where
    T: FromStr<Err = ParseIntError>,
{
    if text.starts_with('+') {
        return Err(GeometryParseError::malformed(kind, input));
    }
    text.parse().map_err(|source| GeometryParseError::InvalidNumber {
        kind,
        input: input.to_string(),
        source,
    })
}
