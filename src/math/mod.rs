//! Scalar and vector types used throughout this crate.

pub use self::point2::Point2;
pub use self::vector2::Vector2;

mod point2;
mod vector2;

/// The scalar type used throughout this crate.
pub type Real = f32;

/// The default tolerance used for approximate comparisons.
pub const DEFAULT_EPSILON: Real = 0.001;
