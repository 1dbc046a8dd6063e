//! Shapes usable by the separating-axis queries.

pub use self::axis_aligned_line::{
    interval_contains, intervals_intersect, intervals_intersect_mtv, AxisAlignedLine2,
    AxisMismatch,
};
pub use self::rect::Rect2;
pub use self::triangle::{Triangle2, TriangleError};

mod axis_aligned_line;
mod rect;
mod triangle;
