//! Positioned rectangles: crop windows, scaler inputs, sensor areas.

use std::fmt;
use std::str::FromStr;

use super::{Point, Size};
use crate::error::GeometryParseError;

/// A rectangle described by the position of its top-left corner and its
/// dimensions.
///
/// The coordinate space is defined by the caller (sensor pixel array, output
/// frame, ...). The textual form is `"(XxY)/WIDTHxHEIGHT"`, for example
/// `"(16x-8)/640x480"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rectangle {
    /// The horizontal coordinate of the top-left corner.
    pub x: i32,
    /// The vertical coordinate of the top-left corner.
    pub y: i32,
    /// The distance between the left and right sides.
    pub width: u32,
    /// The distance between the top and bottom sides.
    pub height: u32,
}

impl Rectangle {
    /// Creates a new rectangle from individual coordinate and dimension values.
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Rectangle { x, y, width, height }
    }

    /// Creates a new rectangle of `size` with its top-left corner at `(x, y)`.
    pub const fn with_size(x: i32, y: i32, size: Size) -> Self {
        Rectangle::new(x, y, size.width, size.height)
    }

    /// Returns `true` if both width and height are zero.
    pub fn is_null(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns the dimensions of the rectangle.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Returns the coordinates of the top-left corner.
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Returns the center point, rounding towards the top-left corner.
    pub fn center(&self) -> Point {
        Point::new(
            (i64::from(self.x) + i64::from(self.width / 2)) as i32,
            (i64::from(self.y) + i64::from(self.height / 2)) as i32,
        )
    }

    /// Applies a non-uniform rational scaling in place.
    ///
    /// See [`Rectangle::scaled_by`].
    pub fn scale_by(&mut self, numerator: Size, denominator: Size) -> &mut Self {
        *self = self.scaled_by(numerator, denominator);
        self
    }

    /// Translates the rectangle in place by `point`.
    pub fn translate_by(&mut self, point: Point) -> &mut Self {
        *self = self.translated_by(point);
        self
    }

    /// Returns the rectangle with a non-uniform rational scaling applied.
    ///
    /// `x` and `width` are multiplied by `numerator.width / denominator.width`,
    /// `y` and `height` by `numerator.height / denominator.height`. Products are
    /// formed in 64 bits before dividing, so position and extent scale
    /// consistently even for large frames. Typical use is mapping a crop
    /// rectangle from one frame size into another:
    ///
    /// ```
    /// use campipe_core::types::geometry::{Rectangle, Size};
    ///
    /// let crop = Rectangle::new(100, 50, 400, 300);
    /// let scaled = crop.scaled_by(Size::new(1920, 1080), Size::new(640, 360));
    /// assert_eq!(scaled, Rectangle::new(300, 150, 1200, 900));
    /// ```
    ///
    /// # Panics
    ///
    /// Both components of `denominator` must be non-zero.
    pub fn scaled_by(self, numerator: Size, denominator: Size) -> Rectangle {
        debug_assert!(
            denominator.width != 0 && denominator.height != 0,
            "scale denominator {denominator} has a zero component"
        );
        // Positions are signed and extents unsigned; a u32 extent times a
        // u32 numerator only fits in u64.
        let scale_pos = |pos: i32, num: u32, den: u32| i64::from(pos) * i64::from(num) / i64::from(den);
        let scale_ext = |ext: u32, num: u32, den: u32| u64::from(ext) * u64::from(num) / u64::from(den);

        Rectangle::new(
            scale_pos(self.x, numerator.width, denominator.width) as i32,
            scale_pos(self.y, numerator.height, denominator.height) as i32,
            scale_ext(self.width, numerator.width, denominator.width) as u32,
            scale_ext(self.height, numerator.height, denominator.height) as u32,
        )
    }

    /// Returns the rectangle translated by `point`. The size is unchanged.
    pub fn translated_by(self, point: Point) -> Rectangle {
        Rectangle::new(self.x + point.x, self.y + point.y, self.width, self.height)
    }

    /// Returns the intersection of this rectangle with `bound`.
    ///
    /// Each axis is handled on its own: if the rectangles do not overlap
    /// horizontally the result has zero width, but its height and position
    /// are still computed. Such a sliver is not collapsed to a null rectangle.
    pub fn bounded_to(self, bound: Rectangle) -> Rectangle {
        let top_left_x = self.x.max(bound.x);
        let top_left_y = self.y.max(bound.y);
        let bottom_right_x = self.right().min(bound.right());
        let bottom_right_y = self.bottom().min(bound.bottom());

        Rectangle::new(
            top_left_x,
            top_left_y,
            (bottom_right_x - i64::from(top_left_x)).max(0) as u32,
            (bottom_right_y - i64::from(top_left_y)).max(0) as u32,
        )
    }

    /// Returns this rectangle moved, and only if unavoidable shrunk, so that
    /// it lies entirely within `boundary`.
    ///
    /// The size is first clipped to the boundary's own size. The position is
    /// then clamped so the result fits, which means a rectangle that already
    /// fits is translated rather than cut down as [`Rectangle::bounded_to`]
    /// would do.
    pub fn enclosed_in(self, boundary: Rectangle) -> Rectangle {
        let mut result = self.bounded_to(Rectangle::with_size(self.x, self.y, boundary.size()));

        let max_x = boundary.right() - i64::from(result.width);
        let max_y = boundary.bottom() - i64::from(result.height);
        result.x = i64::from(result.x).clamp(i64::from(boundary.x), max_x) as i32;
        result.y = i64::from(result.y).clamp(i64::from(boundary.y), max_y) as i32;

        result
    }

    fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }
}

impl From<Size> for Rectangle {
    /// A rectangle of `size` with its top-left corner at the origin.
    fn from(size: Size) -> Self {
        Rectangle::with_size(0, 0, size)
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}x{})/{}x{}", self.x, self.y, self.width, self.height)
    }
}

impl FromStr for Rectangle {
    type Err = GeometryParseError;

    /// Parses the `"(XxY)/WIDTHxHEIGHT"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let malformed = || GeometryParseError::malformed("rectangle", input);

        let (position, size) = input.split_once(")/").ok_or_else(malformed)?;
        let (x, y) = position
            .strip_prefix('(')
            .and_then(|inner| inner.split_once('x'))
            .ok_or_else(malformed)?;
        let size: Size = size.parse().map_err(|_| malformed())?;

        Ok(Rectangle::with_size(
            super::parse_component("rectangle", input, x)?,
            super::parse_component("rectangle", input, y)?,
            size,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_rectangle_accessors() {
        let r = Rectangle::new(-4, 8, 640, 480);
        assert_eq!(r.size(), Size::new(640, 480));
        assert_eq!(r.top_left(), Point::new(-4, 8));
        assert!(!r.is_null());
        assert!(Rectangle::default().is_null());
        assert!(Rectangle::new(10, 10, 0, 0).is_null());
        assert!(!Rectangle::new(0, 0, 0, 1).is_null());
    }

    #[test]
    fn test_rectangle_from_size_sits_at_origin() {
        let r = Rectangle::from(Size::new(1920, 1080));
        assert_eq!(r, Rectangle::new(0, 0, 1920, 1080));
        assert_eq!(Rectangle::with_size(3, 4, Size::new(5, 6)), Rectangle::new(3, 4, 5, 6));
    }

    #[test]
    fn test_rectangle_center_truncates() {
        assert_eq!(Rectangle::new(0, 0, 101, 51).center(), Point::new(50, 25));
        assert_eq!(Rectangle::new(-10, -10, 4, 4).center(), Point::new(-8, -8));
    }

    #[test]
    fn test_rectangle_scaling() {
        let r = Rectangle::new(10, -20, 100, 50);
        let scaled = r.scaled_by(Size::new(3, 1), Size::new(2, 4));
        assert_eq!(scaled, Rectangle::new(15, -5, 150, 12));

        let mut in_place = r;
        in_place.scale_by(Size::new(3, 1), Size::new(2, 4));
        assert_eq!(in_place, scaled);
    }

    #[test]
    fn test_rectangle_scaling_uses_wide_intermediates() {
        let r = Rectangle::new(i32::MAX / 2, 0, u32::MAX / 2, 10);
        let scaled = r.scaled_by(Size::new(2, 1), Size::new(2, 1));
        assert_eq!(scaled, r);
    }

    #[test]
    fn test_rectangle_scaling_full_range_extent() {
        let r = Rectangle::new(i32::MIN, i32::MAX, u32::MAX, u32::MAX - 1);
        let full = Size::new(u32::MAX, u32::MAX);
        assert_eq!(r.scaled_by(full, full), r);

        let r = Rectangle::new(-1000, 100, 4_000_000_000, 10);
        let scaled = r.scaled_by(Size::new(3_000_000_000, 1), Size::new(4_000_000_000, 2));
        assert_eq!(scaled, Rectangle::new(-750, 50, 3_000_000_000, 5));
    }

    #[test]
    fn test_rectangle_translation() {
        let r = Rectangle::new(10, 10, 30, 40);
        assert_eq!(r.translated_by(Point::new(5, -15)), Rectangle::new(15, -5, 30, 40));

        let mut m = r;
        m.translate_by(Point::new(1, 1)).translate_by(-Point::new(11, 11));
        assert_eq!(m, Rectangle::new(0, 0, 30, 40));
    }

    #[rstest]
    #[case(
        Rectangle::new(0, 0, 100, 100),
        Rectangle::new(50, 50, 100, 100),
        Rectangle::new(50, 50, 50, 50)
    )]
    #[case(
        Rectangle::new(0, 0, 100, 100),
        Rectangle::new(25, 25, 10, 10),
        Rectangle::new(25, 25, 10, 10)
    )]
    #[case(
        Rectangle::new(0, 0, 10, 10),
        Rectangle::new(20, 0, 10, 10),
        Rectangle::new(20, 0, 0, 10)
    )]
    #[case(
        Rectangle::new(0, 0, 10, 10),
        Rectangle::new(20, 30, 10, 10),
        Rectangle::new(20, 30, 0, 0)
    )]
    #[case(
        Rectangle::new(-50, -50, 100, 100),
        Rectangle::new(0, 0, 1920, 1080),
        Rectangle::new(0, 0, 50, 50)
    )]
    fn test_rectangle_bounded_to(
        #[case] rect: Rectangle,
        #[case] bound: Rectangle,
        #[case] expected: Rectangle,
    ) {
        assert_eq!(rect.bounded_to(bound), expected);
    }

    #[test]
    fn test_rectangle_bounded_to_keeps_sliver_on_overlapping_axis() {
        let r = Rectangle::new(0, 0, 10, 10).bounded_to(Rectangle::new(20, 0, 10, 10));
        assert_eq!(r.width, 0);
        assert_eq!(r.height, 10);
        assert!(!r.is_null());
    }

    #[rstest]
    #[case(
        Rectangle::new(90, 90, 20, 20),
        Rectangle::new(0, 0, 100, 100),
        Rectangle::new(80, 80, 20, 20)
    )]
    #[case(
        Rectangle::new(-10, 50, 20, 20),
        Rectangle::new(0, 0, 100, 100),
        Rectangle::new(0, 50, 20, 20)
    )]
    #[case(
        Rectangle::new(10, 10, 20, 20),
        Rectangle::new(0, 0, 100, 100),
        Rectangle::new(10, 10, 20, 20)
    )]
    #[case(
        Rectangle::new(-30, 10, 200, 50),
        Rectangle::new(0, 0, 100, 100),
        Rectangle::new(0, 10, 100, 50)
    )]
    #[case(
        Rectangle::new(500, 500, 40, 30),
        Rectangle::new(100, 200, 64, 48),
        Rectangle::new(124, 218, 40, 30)
    )]
    fn test_rectangle_enclosed_in(
        #[case] rect: Rectangle,
        #[case] boundary: Rectangle,
        #[case] expected: Rectangle,
    ) {
        assert_eq!(rect.enclosed_in(boundary), expected);
    }

    #[test]
    fn test_rectangle_enclosing_differs_from_intersection() {
        let r = Rectangle::new(90, 90, 20, 20);
        let boundary = Rectangle::new(0, 0, 100, 100);
        assert_eq!(r.bounded_to(boundary), Rectangle::new(90, 90, 10, 10));
        assert_eq!(r.enclosed_in(boundary), Rectangle::new(80, 80, 20, 20));
    }

    #[test]
    fn test_rectangle_display_and_parse() {
        let r = Rectangle::new(16, -8, 640, 480);
        assert_eq!(r.to_string(), "(16x-8)/640x480");
        assert_eq!("(16x-8)/640x480".parse::<Rectangle>().unwrap(), r);
        assert!("(16,-8)/640x480".parse::<Rectangle>().is_err());
        assert!("(16x-8)640x480".parse::<Rectangle>().is_err());
        assert!("(16x-8)/640".parse::<Rectangle>().is_err());
    }
}
