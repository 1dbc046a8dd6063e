use crate::math::{Real, Vector2};
use crate::shape::{intervals_intersect, intervals_intersect_mtv, Rect2};

fn rect_rect_intersect_mtv_along_axis(
    rect1: &Rect2,
    rect2: &Rect2,
    pos1: Vector2,
    pos2: Vector2,
    axis: Vector2,
) -> Option<Real> {
    let proj1 = rect1.project_along_axis(pos1, axis);
    let proj2 = rect2.project_along_axis(pos2, axis);

    intervals_intersect_mtv(proj1.min, proj1.max, proj2.min, proj2.max, false)
}

/// Tests if `rect1` at `pos1` intersects `rect2` at `pos2`.
///
/// Two axis-aligned rectangles only have the unit axes as candidate
/// separating axes.
pub fn rect_rect_intersects(
    rect1: &Rect2,
    rect2: &Rect2,
    pos1: Vector2,
    pos2: Vector2,
    strict: bool,
) -> bool {
    for axis in [Vector2::UNIT_X, Vector2::UNIT_Y] {
        let proj1 = rect1.project_along_axis(pos1, axis);
        let proj2 = rect2.project_along_axis(pos2, axis);

        if !intervals_intersect(proj1.min, proj1.max, proj2.min, proj2.max, strict, false) {
            return false;
        }
    }

    true
}

/// Computes the MTV to move `pos1` by so that `rect1` stops intersecting
/// `rect2` at `pos2`. Returns `None` if the rectangles do not intersect.
///
/// The axis with the smaller translation magnitude wins; an exact tie keeps
/// `UNIT_X`.
pub fn rect_rect_intersect_mtv(
    rect1: &Rect2,
    rect2: &Rect2,
    pos1: Vector2,
    pos2: Vector2,
) -> Option<Vector2> {
    let mut best_axis = Vector2::ZERO;
    let mut best_magn = Real::MAX;

    for axis in [Vector2::UNIT_X, Vector2::UNIT_Y] {
        let mtv = rect_rect_intersect_mtv_along_axis(rect1, rect2, pos1, pos2, axis)?;

        if mtv.abs() < best_magn.abs() {
            best_axis = axis;
            best_magn = mtv;
        }
    }

    Some(best_axis * best_magn)
}
