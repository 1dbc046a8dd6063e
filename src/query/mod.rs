//! Stateless pairwise shape queries.

pub use self::sat::{
    rect_rect_intersect_mtv, rect_rect_intersects, rect_triangle_intersect_mtv,
    rect_triangle_intersects, triangle_rect_intersect_mtv, triangle_rect_intersects,
    triangle_triangle_intersect_mtv, triangle_triangle_intersects,
};

pub mod sat;
