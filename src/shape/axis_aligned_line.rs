//! Definition of the projected-interval primitive.

use crate::math::{Real, Vector2};

/// Error indicating that two projected intervals were compared along
/// different axes.
///
/// Interval comparisons are only meaningful between projections along the
/// exact same world-space axis; hitting this error means the caller's axis
/// enumeration is wrong. It is a precondition violation, not a recoverable
/// condition.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
#[error("intervals projected along {axis1:?} and {axis2:?} are not aligned and cannot be compared")]
pub struct AxisMismatch {
    /// The axis of the first interval.
    pub axis1: Vector2,
    /// The axis of the second interval.
    pub axis2: Vector2,
}

/// A 1D interval of scalar positions along a specific world-space axis.
///
/// This is what every convex shape projects into, and the currency all
/// separating-axis tests are reduced to. Instances are an interim
/// calculation: built per comparison and discarded immediately.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct AxisAlignedLine2 {
    /// The unit axis this interval was projected along.
    pub axis: Vector2,
    /// The lower end of the interval. Never greater than `max`.
    pub min: Real,
    /// The upper end of the interval.
    pub max: Real,
}

impl AxisAlignedLine2 {
    /// Creates a new interval along `axis`, silently reordering the bounds
    /// so that `min <= max`.
    #[inline]
    pub fn new(axis: Vector2, min: Real, max: Real) -> Self {
        AxisAlignedLine2 {
            axis,
            min: min.min(max),
            max: min.max(max),
        }
    }

    /// Tests if this interval intersects `other`.
    ///
    /// In non-strict mode intervals touching at an endpoint count as
    /// intersecting; in strict mode they do not.
    ///
    /// Errors if the two intervals were not projected along the exact same
    /// axis.
    pub fn intersects(&self, other: &AxisAlignedLine2, strict: bool) -> Result<bool, AxisMismatch> {
        if self.axis != other.axis {
            return Err(AxisMismatch {
                axis1: self.axis,
                axis2: other.axis,
            });
        }

        Ok(intervals_intersect(
            self.min, self.max, other.min, other.max, strict, false,
        ))
    }

    /// Computes the signed displacement to apply to this interval, along its
    /// axis, so that it no longer overlaps `other`. Returns `Ok(None)` if
    /// the intervals do not (strictly) overlap.
    ///
    /// Errors if the two intervals were not projected along the exact same
    /// axis.
    pub fn intersect_mtv(&self, other: &AxisAlignedLine2) -> Result<Option<Real>, AxisMismatch> {
        if self.axis != other.axis {
            return Err(AxisMismatch {
                axis1: self.axis,
                axis2: other.axis,
            });
        }

        Ok(intervals_intersect_mtv(
            self.min, self.max, other.min, other.max, false,
        ))
    }

    /// Tests if this interval contains `point`, excluding the endpoints when
    /// `strict`.
    #[inline]
    pub fn contains(&self, point: Real, strict: bool) -> bool {
        interval_contains(self.min, self.max, point, strict, false)
    }
}

/// Tests if the raw interval `(min1, max1)` intersects `(min2, max2)`.
///
/// When `correct_min_max` is set, each pair is reordered first. The overlap
/// test is expressed as its two one-sided conditions; non-strict uses `>=`
/// where strict uses `>`.
#[inline]
pub fn intervals_intersect(
    min1: Real,
    max1: Real,
    min2: Real,
    max2: Real,
    strict: bool,
    correct_min_max: bool,
) -> bool {
    let (min1, max1, min2, max2) = if correct_min_max {
        (min1.min(max1), min1.max(max1), min2.min(max2), min2.max(max2))
    } else {
        (min1, max1, min2, max2)
    };

    if strict {
        (min1 <= min2 && max1 > min2) || (min2 <= min1 && max2 > min1)
    } else {
        (min1 <= min2 && max1 >= min2) || (min2 <= min1 && max2 >= min1)
    }
}

/// Computes the signed translation moving `(min1, max1)` out of overlap with
/// `(min2, max2)`, or `None` when they do not strictly overlap.
///
/// When interval 1 encroaches from below, its max is pushed down to `min2`;
/// in the symmetric case its min is pushed up to `max2`. The first branch
/// wins when both apply.
#[inline]
pub fn intervals_intersect_mtv(
    min1: Real,
    max1: Real,
    min2: Real,
    max2: Real,
    correct_min_max: bool,
) -> Option<Real> {
    let (min1, max1, min2, max2) = if correct_min_max {
        (min1.min(max1), min1.max(max1), min2.min(max2), min2.max(max2))
    } else {
        (min1, max1, min2, max2)
    };

    if min1 <= min2 && max1 > min2 {
        Some(min2 - max1)
    } else if min2 <= min1 && max2 > min1 {
        Some(max2 - min1)
    } else {
        None
    }
}

/// Tests if the raw interval `(min, max)` contains `point`, excluding the
/// endpoints when `strict`.
#[inline]
pub fn interval_contains(
    min: Real,
    max: Real,
    point: Real,
    strict: bool,
    correct_min_max: bool,
) -> bool {
    let (min, max) = if correct_min_max {
        (min.min(max), min.max(max))
    } else {
        (min, max)
    };

    if strict {
        min < point && max > point
    } else {
        min <= point && max >= point
    }
}
