//! Definition of the axis-aligned rectangle shape.

use crate::math::{Real, Vector2};
use crate::query::sat;
use crate::shape::AxisAlignedLine2;

/// An axis-aligned rectangle described by two opposite corners, in local
/// space.
///
/// Like [`Triangle2`](crate::shape::Triangle2), a rectangle never stores its
/// world position; queries take the origin as a separate argument. Its
/// candidate separating axes are always the coordinate unit axes, so no
/// normals are stored.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Rect2 {
    min: Vector2,
    max: Vector2,
}

impl Rect2 {
    /// Creates a rectangle from two opposite corners, silently reordering
    /// each component so that `min.x <= max.x` and `min.y <= max.y`.
    #[inline]
    pub fn new(a: Vector2, b: Vector2) -> Rect2 {
        Rect2 {
            min: Vector2::new(a.x.min(b.x), a.y.min(b.y)),
            max: Vector2::new(a.x.max(b.x), a.y.max(b.y)),
        }
    }

    /// The corner with the smallest coordinates.
    #[inline]
    pub fn min(&self) -> Vector2 {
        self.min
    }

    /// The corner with the largest coordinates.
    #[inline]
    pub fn max(&self) -> Vector2 {
        self.max
    }

    /// The extent of this rectangle along the x axis.
    #[inline]
    pub fn width(&self) -> Real {
        self.max.x - self.min.x
    }

    /// The extent of this rectangle along the y axis.
    #[inline]
    pub fn height(&self) -> Real {
        self.max.y - self.min.y
    }

    /// The four corners of this rectangle, counterclockwise from `min`.
    #[inline]
    pub fn vertices(&self) -> [Vector2; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    /// Projects this rectangle, placed at `pos`, onto `axis`.
    #[inline]
    pub fn project_along_axis(&self, pos: Vector2, axis: Vector2) -> AxisAlignedLine2 {
        sat::project_points_along_axis(axis, pos, &self.vertices())
    }
}
