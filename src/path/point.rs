//! Integer points on the drawing grid.

use std::fmt;
use std::ops::{Add, AddAssign, Sub};

use serde::Serialize;

/// A position or displacement in whole drawing units.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Componentwise minimum.
    pub fn min(self, other: Point) -> Point {
        Point::new(self.x.min(other.x), self.y.min(other.y))
    }

    /// Componentwise maximum.
    pub fn max(self, other: Point) -> Point {
        Point::new(self.x.max(other.x), self.y.max(other.y))
    }

    pub fn is_zero(self) -> bool {
        self == Point::ZERO
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl AddAssign for Point {
    fn add_assign(&mut self, rhs: Point) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

/// Formats as `x,y`, the pair syntax used in path data.
impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

/// Converts a parsed coordinate to the integer grid.
///
/// Every number read from path data goes through here. Fractions are
/// dropped toward zero, so `-2.7` becomes `-2`. Out-of-range values saturate.
pub fn to_coordinate(value: f64) -> i32 {
    value.trunc() as i32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_coordinate_truncates_toward_zero() {
        assert_eq!(to_coordinate(2.9), 2);
        assert_eq!(to_coordinate(-2.9), -2);
        assert_eq!(to_coordinate(0.4), 0);
        assert_eq!(to_coordinate(-0.4), 0);
        assert_eq!(to_coordinate(1e12), i32::MAX);
    }

    #[test]
    fn test_min_max_are_componentwise() {
        let a = Point::new(3, -4);
        let b = Point::new(-1, 7);
        assert_eq!(a.min(b), Point::new(-1, -4));
        assert_eq!(a.max(b), Point::new(3, 7));
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Point::new(i32::MAX, i32::MIN);
        assert_eq!(big + Point::new(1, 0), Point::new(i32::MAX, i32::MIN));
        assert_eq!(big - Point::new(0, 1), Point::new(i32::MAX, i32::MIN));
    }

    #[test]
    fn test_display_uses_pair_syntax() {
        assert_eq!(Point::new(-3, 12).to_string(), "-3,12");
    }
}
