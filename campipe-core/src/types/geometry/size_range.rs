//! Stepped ranges of sizes, as reported by sensors and scalers.

use std::fmt;
use std::str::FromStr;

use super::Size;
use crate::error::GeometryParseError;

/// An inclusive range of sizes with optional horizontal and vertical steps.
///
/// The range holds every size whose width is `min.width + h_step * i` and
/// whose height is `min.height + v_step * j`, bounded by `max` on both axes.
/// A step of zero carries no granularity: only the bounds are checked on that
/// axis. A range with `min == max` and steps of one describes a single size.
///
/// Equality compares `min` and `max` only. Two ranges with the same bounds but
/// different steps are equal.
#[derive(Debug, Clone, Copy, Default)]
pub struct SizeRange {
    /// The minimum size.
    pub min: Size,
    /// The maximum size.
    pub max: Size,
    /// The horizontal step.
    pub h_step: u32,
    /// The vertical step.
    pub v_step: u32,
}

impl SizeRange {
    /// Creates a range from `min` to `max` with steps of one.
    pub const fn new(min: Size, max: Size) -> Self {
        SizeRange::with_steps(min, max, 1, 1)
    }

    /// Creates a range from `min` to `max` with the given steps.
    pub const fn with_steps(min: Size, max: Size, h_step: u32, v_step: u32) -> Self {
        SizeRange {
            min,
            max,
            h_step,
            v_step,
        }
    }

    /// Creates a range describing the single size `size`.
    pub const fn from_size(size: Size) -> Self {
        SizeRange::new(size, size)
    }

    /// Returns `true` if `size` lies within the bounds and on the step grid.
    pub fn contains(&self, size: Size) -> bool {
        if size.width < self.min.width
            || size.width > self.max.width
            || size.height < self.min.height
            || size.height > self.max.height
        {
            return false;
        }

        on_step(size.width - self.min.width, self.h_step)
            && on_step(size.height - self.min.height, self.v_step)
    }
}

fn on_step(offset: u32, step: u32) -> bool {
    step == 0 || offset % step == 0
}

impl PartialEq for SizeRange {
    fn eq(&self, other: &SizeRange) -> bool {
        self.min == other.min && self.max == other.max
    }
}

impl Eq for SizeRange {}

impl fmt::Display for SizeRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({})-({})/(+{},+{})",
            self.min, self.max, self.h_step, self.v_step
        )
    }
}

impl FromStr for SizeRange {
    type Err = GeometryParseError;

    /// Parses the `"(min)-(max)/(+h,+v)"` form produced by `Display`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.trim();
        let malformed = || GeometryParseError::malformed("size range", input);

        let (min, rest) = input
            .strip_prefix('(')
            .and_then(|rest| rest.split_once(")-("))
            .ok_or_else(malformed)?;
        let (max, steps) = rest.split_once(")/(+").ok_or_else(malformed)?;
        let (h_step, v_step) = steps
            .strip_suffix(')')
            .and_then(|steps| steps.split_once(",+"))
            .ok_or_else(malformed)?;

        Ok(SizeRange::with_steps(
            min.parse().map_err(|_| malformed())?,
            max.parse().map_err(|_| malformed())?,
            super::parse_component("size range", input, h_step)?,
            super::parse_component("size range", input, v_step)?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[test]
    fn test_size_range_constructors() {
        let zero = SizeRange::default();
        assert_eq!(zero.min, Size::default());
        assert_eq!(zero.max, Size::default());
        assert_eq!((zero.h_step, zero.v_step), (0, 0));

        let single = SizeRange::from_size(Size::new(640, 480));
        assert_eq!(single.min, single.max);
        assert_eq!((single.h_step, single.v_step), (1, 1));

        let plain = SizeRange::new(Size::new(1, 2), Size::new(3, 4));
        assert_eq!((plain.h_step, plain.v_step), (1, 1));
    }

    #[rstest]
    #[case(Size::new(150, 150), true)]
    #[case(Size::new(100, 100), true)]
    #[case(Size::new(200, 200), true)]
    #[case(Size::new(155, 150), false)]
    #[case(Size::new(150, 151), false)]
    #[case(Size::new(250, 150), false)]
    #[case(Size::new(90, 150), false)]
    #[case(Size::new(150, 210), false)]
    fn test_size_range_contains_stepped(#[case] size: Size, #[case] expected: bool) {
        let range = SizeRange::with_steps(Size::new(100, 100), Size::new(200, 200), 10, 10);
        assert_eq!(range.contains(size), expected);
    }

    #[test]
    fn test_size_range_zero_step_checks_bounds_only() {
        let range = SizeRange::with_steps(Size::new(100, 100), Size::new(200, 200), 0, 7);
        assert!(range.contains(Size::new(133, 107)));
        assert!(!range.contains(Size::new(133, 108)));
        assert!(!range.contains(Size::new(201, 107)));
    }

    #[test]
    fn test_size_range_single_size() {
        let range = SizeRange::from_size(Size::new(640, 480));
        assert!(range.contains(Size::new(640, 480)));
        assert!(!range.contains(Size::new(640, 481)));
    }

    #[test]
    fn test_size_range_equality_ignores_steps() {
        let a = SizeRange::with_steps(Size::new(1, 1), Size::new(9, 9), 2, 2);
        let b = SizeRange::with_steps(Size::new(1, 1), Size::new(9, 9), 4, 8);
        assert_eq!(a, b);
        assert_ne!(a, SizeRange::with_steps(Size::new(1, 1), Size::new(9, 8), 2, 2));
    }

    #[test]
    fn test_size_range_display_and_parse() {
        let range = SizeRange::with_steps(Size::new(100, 100), Size::new(200, 200), 10, 5);
        assert_eq!(range.to_string(), "(100x100)-(200x200)/(+10,+5)");

        let parsed: SizeRange = "(100x100)-(200x200)/(+10,+5)".parse().unwrap();
        assert_eq!(parsed, range);
        assert_eq!((parsed.h_step, parsed.v_step), (10, 5));

        assert!("(100x100)-(200x200)".parse::<SizeRange>().is_err());
        assert!("(100x100)-(200x200)/(10,5)".parse::<SizeRange>().is_err());
        assert!("(100x100)-(200)/(+10,+5)".parse::<SizeRange>().is_err());
    }
}
