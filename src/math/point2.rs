//! Definition of the integer-based 2D point type.

use crate::math::{Real, Vector2};

use num_traits::Zero;
use std::ops::{Add, Neg, Sub};

/// A 2D point on an integer grid. The int-based counterpart of [`Vector2`].
///
/// Used where positions are inherently discrete, like tile coordinates in
/// the broad phase.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Eq, Hash, Debug, Copy, Clone, Default)]
pub struct Point2 {
    /// The x coordinate.
    pub x: i32,
    /// The y coordinate.
    pub y: i32,
}

impl Point2 {
    /// Creates a new point with the given coordinates.
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Point2 { x, y }
    }

    /// The dot product of `self` and `rhs`.
    #[inline]
    pub fn dot(&self, rhs: &Point2) -> i32 {
        self.x * rhs.x + self.y * rhs.y
    }
}

impl Add for Point2 {
    type Output = Point2;

    #[inline]
    fn add(self, rhs: Point2) -> Point2 {
        Point2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point2 {
    type Output = Point2;

    #[inline]
    fn sub(self, rhs: Point2) -> Point2 {
        Point2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Point2 {
    type Output = Point2;

    #[inline]
    fn neg(self) -> Point2 {
        Point2::new(-self.x, -self.y)
    }
}

impl Zero for Point2 {
    #[inline]
    fn zero() -> Point2 {
        Point2::new(0, 0)
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.x == 0 && self.y == 0
    }
}

impl From<Point2> for Vector2 {
    /// Widens an integer point to a float vector, exactly.
    #[inline]
    fn from(p: Point2) -> Vector2 {
        Vector2::new(p.x as Real, p.y as Real)
    }
}
