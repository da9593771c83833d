//! Integer pixel coordinates.

use std::fmt;
use std::ops::Neg;
use std::str::FromStr;

use crate::error::GeometryParseError;

/// A point in two-dimensional space with signed integer coordinates.
///
/// Points are plain values: they may be negative and carry no invariant beyond
/// their storage. The textual form is `"(x,y)"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    /// The x-coordinate of the point.
    pub x: i32,
    /// The y-coordinate of the point.
    pub y: i32,
}

impl Point {
    /// Creates a new point at the given coordinates.
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }
}

impl Neg for Point {
    type Output = Self;

    /// Negates both coordinates. `i32::MIN` wraps to itself.
    fn neg(self) -> Self {
        Point::new(self.x.wrapping_neg(), self.y.wrapping_neg())
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

impl FromStr for Point {
    type Err = GeometryParseError;

    /// Parses the `"(x,y)"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (x, y) = input
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .and_then(|inner| inner.split_once(','))
            .ok_or_else(|| GeometryParseError::malformed("point", input))?;

        Ok(Point::new(
            super::parse_component("point", input, x)?,
            super::parse_component("point", input, y)?,
        ))
    }
}
