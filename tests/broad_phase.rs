use approx::abs_diff_eq;

use sat2d::math::Vector2;
use sat2d::partitioning::TileGrid;
use sat2d::query::{rect_rect_intersect_mtv, rect_rect_intersects};
use sat2d::shape::Rect2;

#[test]
fn rect_rect_minimal_mtv_is_along_the_shallow_axis() {
    let rect = Rect2::new(Vector2::ZERO, Vector2::new(4.0, 4.0));
    let pos1 = Vector2::ZERO;
    // Deep overlap along y (3.0), shallow along x (0.1).
    let pos2 = Vector2::new(3.9, 1.0);

    assert!(rect_rect_intersects(&rect, &rect, pos1, pos2, false));

    let mtv = rect_rect_intersect_mtv(&rect, &rect, pos1, pos2).unwrap();
    assert!(abs_diff_eq!(mtv, Vector2::new(-0.1, 0.0), epsilon = 1.0e-5));
}

#[test]
fn touching_rects_intersect_only_non_strictly() {
    let rect = Rect2::new(Vector2::ZERO, Vector2::new(2.0, 2.0));
    let pos2 = Vector2::new(2.0, 0.0);

    assert!(rect_rect_intersects(&rect, &rect, Vector2::ZERO, pos2, false));
    assert!(!rect_rect_intersects(&rect, &rect, Vector2::ZERO, pos2, true));
    assert_eq!(
        rect_rect_intersect_mtv(&rect, &rect, Vector2::ZERO, pos2),
        None
    );
}

/// Broad phase and narrow phase together: the grid prunes to tile-sharing
/// candidates, SAT confirms or rejects each one.
#[test]
fn tile_grid_candidates_feed_the_narrow_phase() {
    let bounds = Rect2::new(Vector2::ZERO, Vector2::new(2.0, 2.0));
    let mut grid = TileGrid::new(8.0, 8, 8);

    let placements = [
        (1, Vector2::new(1.0, 1.0)),
        (2, Vector2::new(2.5, 1.0)),  // overlaps entity 1
        (3, Vector2::new(5.0, 1.0)),  // same tile as 1, no overlap
        (4, Vector2::new(40.0, 1.0)), // different tile entirely
    ];

    for (id, pos) in placements {
        grid.insert(id, &bounds, pos);
    }

    let candidates = grid.candidates(&bounds, placements[0].1);
    assert_eq!(candidates, [1, 2, 3]);

    let overlapping: Vec<u64> = candidates
        .into_iter()
        .filter(|&id| id != 1)
        .filter(|&id| {
            let pos = placements.iter().find(|(other, _)| *other == id).unwrap().1;
            rect_rect_intersects(&bounds, &bounds, placements[0].1, pos, true)
        })
        .collect();

    assert_eq!(overlapping, [2]);
}
