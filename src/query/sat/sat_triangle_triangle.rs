use crate::math::{Real, Vector2};
use crate::shape::{intervals_intersect, intervals_intersect_mtv, Triangle2};

/// Tests if `tri1` at `pos1` and `tri2` at `pos2` overlap when projected
/// onto `axis`.
pub fn triangle_triangle_intersects_along_axis(
    tri1: &Triangle2,
    tri2: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
    strict: bool,
    axis: Vector2,
) -> bool {
    let proj1 = tri1.project_along_axis(pos1, axis);
    let proj2 = tri2.project_along_axis(pos2, axis);

    intervals_intersect(proj1.min, proj1.max, proj2.min, proj2.max, strict, false)
}

/// Computes the signed distance along `axis` to shift `pos1` by so that
/// `tri1` no longer overlaps `tri2`, or `None` if they do not overlap along
/// this axis.
pub fn triangle_triangle_intersect_mtv_along_axis(
    tri1: &Triangle2,
    tri2: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
    axis: Vector2,
) -> Option<Real> {
    let proj1 = tri1.project_along_axis(pos1, axis);
    let proj2 = tri2.project_along_axis(pos2, axis);

    intervals_intersect_mtv(proj1.min, proj1.max, proj2.min, proj2.max, false)
}

/// Tests if `tri1` at `pos1` intersects `tri2` at `pos2`.
///
/// All 6 candidate axes (3 edge normals per triangle) must show overlap;
/// the test returns `false` as soon as any axis separates the shapes.
pub fn triangle_triangle_intersects(
    tri1: &Triangle2,
    tri2: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
    strict: bool,
) -> bool {
    for &axis in tri1.normals().iter().chain(tri2.normals().iter()) {
        if !triangle_triangle_intersects_along_axis(tri1, tri2, pos1, pos2, strict, axis) {
            return false;
        }
    }

    true
}

/// Computes the MTV to move `pos1` by so that `tri1` stops intersecting
/// `tri2` at `pos2`. Returns `None` if the triangles do not intersect.
///
/// Among the 6 candidate axes, the one whose translation has the smallest
/// magnitude wins; an exact tie keeps the earliest axis in enumeration order
/// (`tri1`'s normals before `tri2`'s).
pub fn triangle_triangle_intersect_mtv(
    tri1: &Triangle2,
    tri2: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
) -> Option<Vector2> {
    let mut best_axis = Vector2::ZERO;
    let mut best_magn = Real::MAX;

    for &axis in tri1.normals().iter().chain(tri2.normals().iter()) {
        let mtv = triangle_triangle_intersect_mtv_along_axis(tri1, tri2, pos1, pos2, axis)?;

        if mtv.abs() < best_magn.abs() {
            best_axis = axis;
            best_magn = mtv;
        }
    }

    Some(best_axis * best_magn)
}
