use crate::math::{Real, Vector2};

/// Computes twice the signed area of the triangle `a, b, c`.
///
/// Positive when the points wind counterclockwise.
#[inline]
pub fn doubled_signed_area(a: Vector2, b: Vector2, c: Vector2) -> Real {
    a.x * (b.y - c.y) + b.x * (c.y - a.y) + c.x * (a.y - b.y)
}

/// Tests if `a`, `b` and `c` all lie on a single line, i.e., if the triangle
/// they span has an (absolute doubled) area no larger than `eps`.
#[inline]
pub fn is_collinear(a: Vector2, b: Vector2, c: Vector2, eps: Real) -> bool {
    doubled_signed_area(a, b, c).abs() <= eps
}

#[cfg(test)]
mod test {
    use super::{doubled_signed_area, is_collinear};
    use crate::math::{Vector2, DEFAULT_EPSILON};

    #[test]
    fn test_doubled_signed_area() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(2.0, 0.0);
        let c = Vector2::new(0.0, 2.0);

        assert_eq!(doubled_signed_area(a, b, c), 4.0);
        assert_eq!(doubled_signed_area(a, c, b), -4.0);
    }

    #[test]
    fn test_is_collinear() {
        let a = Vector2::new(0.0, 0.0);
        let b = Vector2::new(1.0, 1.0);
        let c = Vector2::new(2.0, 2.0);

        assert!(is_collinear(a, b, c, DEFAULT_EPSILON));
        assert!(!is_collinear(
            a,
            b,
            Vector2::new(2.0, 2.1),
            DEFAULT_EPSILON
        ));
    }
}
