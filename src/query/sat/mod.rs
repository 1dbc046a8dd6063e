//! Application of the Separating Axis Theorem (SAT) for collision detection.
//!
//! Two convex shapes do **not** intersect if and only if there is an axis
//! onto which their projections do not overlap. The candidate axes for a
//! polygon are its edge normals; for an axis-aligned rectangle they are
//! simply the coordinate unit axes, so they are never stored.
//!
//! Every pairwise test here follows the same scheme: enumerate the candidate
//! axes of both shapes, project each shape onto each axis (reducing it to an
//! [`AxisAlignedLine2`]), and combine the per-axis interval results.
//! Intersection tests short-circuit on the first separating axis found; MTV
//! queries visit every axis and keep the translation of smallest magnitude
//! (exact ties keep the first axis in enumeration order, which is
//! deterministic: shape 1's normals before shape 2's, `UNIT_X` before
//! `UNIT_Y`).
//!
//! Each submodule covers one pair of shape types:
//!
//! - **Triangle-Triangle**: both shapes contribute their 3 edge normals.
//! - **Triangle-Rect**: the triangle's normals plus, when no normal is
//!   already exactly axis-aligned, the unit axes.
//! - **Rect-Rect**: the unit axes only.

pub use self::sat_rect_rect::*;
pub use self::sat_triangle_rect::*;
pub use self::sat_triangle_triangle::*;

mod sat_rect_rect;
mod sat_triangle_rect;
mod sat_triangle_triangle;

use crate::math::Vector2;
use crate::shape::AxisAlignedLine2;

/// Projects the polygon given by `points`, with origin `pos`, onto `axis`.
///
/// This is the shared projection primitive all shapes reduce to: dot every
/// translated point with the axis and keep the extremes.
pub fn project_points_along_axis(
    axis: Vector2,
    pos: Vector2,
    points: &[Vector2],
) -> AxisAlignedLine2 {
    debug_assert!(!points.is_empty());

    let mut min = Vector2::dot_parts(points[0].x + pos.x, points[0].y + pos.y, axis.x, axis.y);
    let mut max = min;

    for point in &points[1..] {
        let proj = Vector2::dot_parts(point.x + pos.x, point.y + pos.y, axis.x, axis.y);
        min = min.min(proj);
        max = max.max(proj);
    }

    AxisAlignedLine2 { axis, min, max }
}
