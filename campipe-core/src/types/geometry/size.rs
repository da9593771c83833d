//! Two-dimensional unsigned extents.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Div, DivAssign, Mul, MulAssign};
use std::str::FromStr;

use super::{Point, Rectangle};
use crate::error::GeometryParseError;

/// A two-dimensional size with unsigned integer dimensions.
///
/// Every in-place operation (`align_down_to`, `bound_to`, ...) returns
/// `&mut Self` so edits can be chained, and has a pure twin (`aligned_down_to`,
/// `bounded_to`, ...) that leaves the receiver untouched.
///
/// # Ordering
///
/// `Size` implements [`PartialOrd`] with a three-tier comparator rather than a
/// plain area comparison. `a < b` holds when:
///
/// 1. both dimensions of `a` are strictly smaller than those of `b`, otherwise
/// 2. it does not hold if both dimensions of `a` are greater than or equal to
///    those of `b`, otherwise
/// 3. the areas decide, and equal areas are broken by comparing widths.
///
/// Sizes with a zero dimension can fall through every tier without being
/// ordered (for instance `0x10` and `0x5`); `partial_cmp` returns `None` for
/// those pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Size {
    /// The width of the size.
    pub width: u32,
    /// The height of the size.
    pub height: u32,
}

impl Size {
    /// Creates a new size with the given width and height.
    pub const fn new(width: u32, height: u32) -> Self {
        Size { width, height }
    }

    /// Returns `true` if both width and height are zero.
    pub fn is_null(&self) -> bool {
        self.width == 0 && self.height == 0
    }

    /// Returns `width * height` without overflowing.
    pub fn area(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Aligns the size down to multiples of the given alignments, in place.
    pub fn align_down_to(&mut self, h_alignment: u32, v_alignment: u32) -> &mut Self {
        *self = self.aligned_down_to(h_alignment, v_alignment);
        self
    }

    /// Aligns the size up to multiples of the given alignments, in place.
    pub fn align_up_to(&mut self, h_alignment: u32, v_alignment: u32) -> &mut Self {
        *self = self.aligned_up_to(h_alignment, v_alignment);
        self
    }

    /// Bounds both dimensions to `bound`, in place.
    pub fn bound_to(&mut self, bound: Size) -> &mut Self {
        *self = self.bounded_to(bound);
        self
    }

    /// Expands both dimensions to at least `expand`, in place.
    pub fn expand_to(&mut self, expand: Size) -> &mut Self {
        *self = self.expanded_to(expand);
        self
    }

    /// Returns the size with width and height rounded down to the nearest
    /// multiple of `h_alignment` and `v_alignment` respectively.
    ///
    /// Both alignments must be non-zero.
    pub fn aligned_down_to(self, h_alignment: u32, v_alignment: u32) -> Size {
        debug_assert!(h_alignment != 0 && v_alignment != 0, "alignment must be non-zero");
        Size::new(
            self.width / h_alignment * h_alignment,
            self.height / v_alignment * v_alignment,
        )
    }

    /// Returns the size with width and height rounded up to the nearest
    /// multiple of `h_alignment` and `v_alignment` respectively.
    ///
    /// Both alignments must be non-zero. Results that do not fit in `u32`
    /// are truncated.
    pub fn aligned_up_to(self, h_alignment: u32, v_alignment: u32) -> Size {
        debug_assert!(h_alignment != 0 && v_alignment != 0, "alignment must be non-zero");
        Size::new(
            align_up(self.width, h_alignment),
            align_up(self.height, v_alignment),
        )
    }

    /// Returns the component-wise minimum of `self` and `bound`.
    pub fn bounded_to(self, bound: Size) -> Size {
        Size::new(self.width.min(bound.width), self.height.min(bound.height))
    }

    /// Returns the component-wise maximum of `self` and `expand`.
    pub fn expanded_to(self, expand: Size) -> Size {
        Size::new(self.width.max(expand.width), self.height.max(expand.height))
    }

    /// Shrinks one dimension so the result matches the aspect ratio of
    /// `ratio` and fits inside `self`.
    ///
    /// The cross products `width * ratio.height` and `ratio.width * height`
    /// are computed in 64 bits. Whichever dimension is too long is recomputed
    /// by integer division; the other is kept.
    ///
    /// # Panics
    ///
    /// Debug builds assert that both components of `ratio` are non-zero.
    pub fn bounded_to_aspect_ratio(self, ratio: Size) -> Size {
        debug_assert!(
            ratio.width != 0 && ratio.height != 0,
            "aspect ratio {ratio} has a zero component"
        );
        let (by_width, by_height) = self.aspect_cross_products(ratio);

        if by_width > by_height {
            Size::new((by_height / u64::from(ratio.height)) as u32, self.height)
        } else {
            Size::new(self.width, (by_width / u64::from(ratio.width)) as u32)
        }
    }

    /// Grows one dimension so the result matches the aspect ratio of `ratio`
    /// and contains `self`.
    ///
    /// Mirror image of [`Size::bounded_to_aspect_ratio`].
    ///
    /// # Panics
    ///
    /// Debug builds assert that both components of `ratio` are non-zero.
    pub fn expanded_to_aspect_ratio(self, ratio: Size) -> Size {
        debug_assert!(
            ratio.width != 0 && ratio.height != 0,
            "aspect ratio {ratio} has a zero component"
        );
        let (by_width, by_height) = self.aspect_cross_products(ratio);

        if by_width < by_height {
            Size::new((by_height / u64::from(ratio.height)) as u32, self.height)
        } else {
            Size::new(self.width, (by_width / u64::from(ratio.width)) as u32)
        }
    }

    fn aspect_cross_products(self, ratio: Size) -> (u64, u64) {
        (
            u64::from(self.width) * u64::from(ratio.height),
            u64::from(ratio.width) * u64::from(self.height),
        )
    }

    /// Returns a rectangle of this size whose center is `center`.
    ///
    /// The top-left corner is `center - size / 2` with truncating division.
    pub fn centered_to(self, center: Point) -> Rectangle {
        let x = i64::from(center.x) - i64::from(self.width / 2);
        let y = i64::from(center.y) - i64::from(self.height / 2);

        Rectangle::new(x as i32, y as i32, self.width, self.height)
    }
}

fn align_up(value: u32, alignment: u32) -> u32 {
    let alignment = u64::from(alignment);
    ((u64::from(value) + alignment - 1) / alignment * alignment) as u32
}

impl Mul<f32> for Size {
    type Output = Size;

    /// Scales both dimensions up by `factor`, truncating the result.
    fn mul(self, factor: f32) -> Size {
        Size::new(
            (self.width as f32 * factor) as u32,
            (self.height as f32 * factor) as u32,
        )
    }
}

impl Div<f32> for Size {
    type Output = Size;

    /// Scales both dimensions down by `factor`, truncating the result.
    fn div(self, factor: f32) -> Size {
        Size::new(
            (self.width as f32 / factor) as u32,
            (self.height as f32 / factor) as u32,
        )
    }
}

impl MulAssign<f32> for Size {
    fn mul_assign(&mut self, factor: f32) {
        *self = *self * factor;
    }
}

impl DivAssign<f32> for Size {
    fn div_assign(&mut self, factor: f32) {
        *self = *self / factor;
    }
}

impl Size {
    /// The "smaller than" test behind the [`PartialOrd`] implementation.
    fn precedes(&self, other: &Size) -> bool {
        if self.width < other.width && self.height < other.height {
            return true;
        }
        if self.width >= other.width && self.height >= other.height {
            return false;
        }

        match self.area().cmp(&other.area()) {
            Ordering::Less => true,
            Ordering::Greater => false,
            Ordering::Equal => self.width < other.width,
        }
    }
}

impl PartialOrd for Size {
    fn partial_cmp(&self, other: &Size) -> Option<Ordering> {
        if self == other {
            Some(Ordering::Equal)
        } else if self.precedes(other) {
            Some(Ordering::Less)
        } else if other.precedes(self) {
            Some(Ordering::Greater)
        } else {
            None
        }
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = GeometryParseError;

    /// Parses the `"WIDTHxHEIGHT"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let (width, height) = input
            .split_once('x')
            .ok_or_else(|| GeometryParseError::malformed("size", input))?;

        Ok(Size::new(
            super::parse_component("size", input, width)?,
            super::parse_component("size", input, height)?,
        ))
    }
}
