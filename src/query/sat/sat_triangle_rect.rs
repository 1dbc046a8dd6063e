use crate::math::{Real, Vector2};
use crate::shape::{intervals_intersect, intervals_intersect_mtv, Rect2, Triangle2};

/// Tests if `tri` at `pos1` and `rect` at `pos2` overlap when projected
/// onto `axis`.
pub fn triangle_rect_intersects_along_axis(
    tri: &Triangle2,
    rect: &Rect2,
    pos1: Vector2,
    pos2: Vector2,
    strict: bool,
    axis: Vector2,
) -> bool {
    let proj1 = tri.project_along_axis(pos1, axis);
    let proj2 = rect.project_along_axis(pos2, axis);

    intervals_intersect(proj1.min, proj1.max, proj2.min, proj2.max, strict, false)
}

/// Tests if `rect` at `pos1` and `tri` at `pos2` overlap when projected
/// onto `axis`.
pub fn rect_triangle_intersects_along_axis(
    rect: &Rect2,
    tri: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
    strict: bool,
    axis: Vector2,
) -> bool {
    triangle_rect_intersects_along_axis(tri, rect, pos2, pos1, strict, axis)
}

/// Computes the signed distance along `axis` to shift `pos1` by so that
/// `tri` no longer overlaps `rect`, or `None` if they do not overlap along
/// this axis.
pub fn triangle_rect_intersect_mtv_along_axis(
    tri: &Triangle2,
    rect: &Rect2,
    pos1: Vector2,
    pos2: Vector2,
    axis: Vector2,
) -> Option<Real> {
    let proj1 = tri.project_along_axis(pos1, axis);
    let proj2 = rect.project_along_axis(pos2, axis);

    intervals_intersect_mtv(proj1.min, proj1.max, proj2.min, proj2.max, false)
}

/// Computes the signed distance along `axis` to shift `pos1` by so that
/// `rect` no longer overlaps `tri`, or `None` if they do not overlap along
/// this axis.
pub fn rect_triangle_intersect_mtv_along_axis(
    rect: &Rect2,
    tri: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
    axis: Vector2,
) -> Option<Real> {
    let proj1 = rect.project_along_axis(pos1, axis);
    let proj2 = tri.project_along_axis(pos2, axis);

    intervals_intersect_mtv(proj1.min, proj1.max, proj2.min, proj2.max, false)
}

/// Tests if `tri` at `pos1` intersects `rect` at `pos2`.
///
/// The candidate axes are the triangle's 3 normals plus the rectangle's
/// implicit unit axes. A unit axis is skipped when one of the triangle
/// normals is already exactly aligned with it (a normal with `x == 0.0`
/// covers the `UNIT_Y` check and vice versa), so no axis is tested twice.
pub fn triangle_rect_intersects(
    tri: &Triangle2,
    rect: &Rect2,
    pos1: Vector2,
    pos2: Vector2,
    strict: bool,
) -> bool {
    let mut checked_x = false;
    let mut checked_y = false;

    for &normal in tri.normals() {
        if !triangle_rect_intersects_along_axis(tri, rect, pos1, pos2, strict, normal) {
            return false;
        }

        if normal.x == 0.0 {
            checked_y = true;
        }
        if normal.y == 0.0 {
            checked_x = true;
        }
    }

    if !checked_x
        && !triangle_rect_intersects_along_axis(tri, rect, pos1, pos2, strict, Vector2::UNIT_X)
    {
        return false;
    }
    if !checked_y
        && !triangle_rect_intersects_along_axis(tri, rect, pos1, pos2, strict, Vector2::UNIT_Y)
    {
        return false;
    }

    true
}

/// Tests if `rect` at `pos1` intersects `tri` at `pos2`.
pub fn rect_triangle_intersects(
    rect: &Rect2,
    tri: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
    strict: bool,
) -> bool {
    triangle_rect_intersects(tri, rect, pos2, pos1, strict)
}

/// Computes the MTV to move `pos1` by so that `tri` stops intersecting
/// `rect` at `pos2`. Returns `None` if the shapes do not intersect.
///
/// Axis enumeration and redundancy-avoidance match
/// [`triangle_rect_intersects`]; among the tested axes the translation of
/// smallest magnitude wins, with exact ties keeping the earliest axis
/// (triangle normals first, then `UNIT_X`, then `UNIT_Y`).
pub fn triangle_rect_intersect_mtv(
    tri: &Triangle2,
    rect: &Rect2,
    pos1: Vector2,
    pos2: Vector2,
) -> Option<Vector2> {
    let mut checked_x = false;
    let mut checked_y = false;

    let mut best_axis = Vector2::ZERO;
    let mut best_magn = Real::MAX;

    for &normal in tri.normals() {
        let mtv = triangle_rect_intersect_mtv_along_axis(tri, rect, pos1, pos2, normal)?;

        if mtv.abs() < best_magn.abs() {
            best_axis = normal;
            best_magn = mtv;
        }

        if normal.x == 0.0 {
            checked_y = true;
        }
        if normal.y == 0.0 {
            checked_x = true;
        }
    }

    if !checked_x {
        let mtv = triangle_rect_intersect_mtv_along_axis(tri, rect, pos1, pos2, Vector2::UNIT_X)?;

        if mtv.abs() < best_magn.abs() {
            best_axis = Vector2::UNIT_X;
            best_magn = mtv;
        }
    }

    if !checked_y {
        let mtv = triangle_rect_intersect_mtv_along_axis(tri, rect, pos1, pos2, Vector2::UNIT_Y)?;

        if mtv.abs() < best_magn.abs() {
            best_axis = Vector2::UNIT_Y;
            best_magn = mtv;
        }
    }

    Some(best_axis * best_magn)
}

/// Computes the MTV to move `pos1` by so that `rect` stops intersecting
/// `tri` at `pos2`.
///
/// Pushing the rectangle away from the triangle is the negation of pushing
/// the triangle away from the rectangle.
pub fn rect_triangle_intersect_mtv(
    rect: &Rect2,
    tri: &Triangle2,
    pos1: Vector2,
    pos2: Vector2,
) -> Option<Vector2> {
    triangle_rect_intersect_mtv(tri, rect, pos2, pos1).map(|mtv| -mtv)
}
