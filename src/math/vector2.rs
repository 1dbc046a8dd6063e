//! Definition of the float-based 2D vector type.

use crate::math::{Point2, Real, DEFAULT_EPSILON};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Zero;
use std::ops::{Add, Mul, Neg, Sub};

/// A 2D vector or point, float based.
///
/// This is the position/displacement currency of the whole crate: shape
/// vertices, separating axes, and MTVs are all `Vector2`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone, Default)]
pub struct Vector2 {
    /// The x component.
    pub x: Real,
    /// The y component.
    pub y: Real,
}

impl Vector2 {
    /// The zero vector.
    pub const ZERO: Vector2 = Vector2 { x: 0.0, y: 0.0 };
    /// The unit vector along the x axis.
    pub const UNIT_X: Vector2 = Vector2 { x: 1.0, y: 0.0 };
    /// The unit vector along the y axis.
    pub const UNIT_Y: Vector2 = Vector2 { x: 0.0, y: 1.0 };

    /// Creates a new vector with the given components.
    #[inline]
    pub const fn new(x: Real, y: Real) -> Self {
        Vector2 { x, y }
    }

    /// The dot product of `self` and `rhs`.
    #[inline]
    pub fn dot(&self, rhs: &Vector2) -> Real {
        self.x * rhs.x + self.y * rhs.y
    }

    /// The dot product of `(x1, y1)` and `(x2, y2)`.
    ///
    /// Lets hot loops (like polygon projection) dot translated points
    /// without building intermediate vectors.
    #[inline]
    pub fn dot_parts(x1: Real, y1: Real, x2: Real, y2: Real) -> Real {
        x1 * x2 + y1 * y2
    }

    /// The squared magnitude of this vector.
    #[inline]
    pub fn magnitude_squared(&self) -> Real {
        self.x * self.x + self.y * self.y
    }

    /// The magnitude of this vector.
    #[inline]
    pub fn magnitude(&self) -> Real {
        self.magnitude_squared().sqrt()
    }

    /// Returns the vector with magnitude 1 pointing in the same direction as
    /// `self`.
    ///
    /// The zero vector has no direction: normalizing it yields NaN
    /// components. Use [`Vector2::try_normalize`] when the input may be
    /// degenerate.
    #[inline]
    pub fn normalize(&self) -> Vector2 {
        let magn = self.magnitude();
        Vector2::new(self.x / magn, self.y / magn)
    }

    /// Normalizes `self`, returning `None` if its magnitude is smaller than
    /// `eps`.
    #[inline]
    pub fn try_normalize(&self, eps: Real) -> Option<Vector2> {
        let magn = self.magnitude();
        if magn < eps {
            None
        } else {
            Some(Vector2::new(self.x / magn, self.y / magn))
        }
    }

    /// The counterclockwise perpendicular of this vector: `(x, y) -> (-y, x)`.
    #[inline]
    pub fn perp(&self) -> Vector2 {
        Vector2::new(-self.y, self.x)
    }

    /// Truncates the components toward zero, narrowing to an integer point.
    #[inline]
    pub fn truncate(self) -> Point2 {
        Point2::new(self.x as i32, self.y as i32)
    }
}

impl Add for Vector2 {
    type Output = Vector2;

    #[inline]
    fn add(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vector2 {
    type Output = Vector2;

    #[inline]
    fn sub(self, rhs: Vector2) -> Vector2 {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;

    #[inline]
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl Mul<Real> for Vector2 {
    type Output = Vector2;

    #[inline]
    fn mul(self, scalar: Real) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Mul<Vector2> for Real {
    type Output = Vector2;

    #[inline]
    fn mul(self, v: Vector2) -> Vector2 {
        v * self
    }
}

impl Zero for Vector2 {
    #[inline]
    fn zero() -> Vector2 {
        Vector2::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        *self == Vector2::ZERO
    }
}

impl AbsDiffEq for Vector2 {
    type Epsilon = Real;

    #[inline]
    fn default_epsilon() -> Real {
        DEFAULT_EPSILON
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Real) -> bool {
        Real::abs_diff_eq(&self.x, &other.x, epsilon)
            && Real::abs_diff_eq(&self.y, &other.y, epsilon)
    }
}

impl RelativeEq for Vector2 {
    #[inline]
    fn default_max_relative() -> Real {
        Real::default_max_relative()
    }

    #[inline]
    fn relative_eq(&self, other: &Self, epsilon: Real, max_relative: Real) -> bool {
        Real::relative_eq(&self.x, &other.x, epsilon, max_relative)
            && Real::relative_eq(&self.y, &other.y, epsilon, max_relative)
    }
}

#[cfg(test)]
mod test {
    use crate::math::Vector2;

    #[test]
    fn test_arithmetic() {
        let a = Vector2::new(1.0, 2.0);
        let b = Vector2::new(-3.0, 0.5);

        assert_eq!(a + b, Vector2::new(-2.0, 2.5));
        assert_eq!(a - b, Vector2::new(4.0, 1.5));
        assert_eq!(-a, Vector2::new(-1.0, -2.0));
        assert_eq!(a * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a.dot(&b), -2.0);
        assert_eq!(Vector2::dot_parts(1.0, 2.0, -3.0, 0.5), -2.0);
    }

    #[test]
    fn test_magnitude_and_normalize() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude_squared(), 25.0);
        assert_eq!(v.magnitude(), 5.0);
        assert!(abs_diff_eq!(v.normalize(), Vector2::new(0.6, 0.8)));
        assert!(abs_diff_eq!(v.normalize().magnitude(), 1.0));
    }

    #[test]
    fn test_normalize_zero_vector() {
        // The unguarded form has no answer for the zero vector.
        let n = Vector2::ZERO.normalize();
        assert!(n.x.is_nan() && n.y.is_nan());

        assert_eq!(Vector2::ZERO.try_normalize(1.0e-6), None);
        assert!(Vector2::new(0.0, 2.0).try_normalize(1.0e-6).is_some());
    }

    #[test]
    fn test_perp() {
        let v = Vector2::new(2.0, 1.0);
        assert_eq!(v.perp(), Vector2::new(-1.0, 2.0));
        assert_eq!(v.perp().dot(&v), 0.0);
    }

    #[test]
    fn test_approx_uses_default_epsilon() {
        let a = Vector2::new(1.0, 1.0);
        assert!(abs_diff_eq!(a, Vector2::new(1.0005, 0.9995)));
        assert!(!abs_diff_eq!(a, Vector2::new(1.002, 1.0)));
    }

    #[test]
    fn test_truncate() {
        assert_eq!(
            Vector2::new(3.7, -1.2).truncate(),
            crate::math::Point2::new(3, -1)
        );
    }
}
