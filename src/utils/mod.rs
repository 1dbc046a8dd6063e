//! Various unsorted geometric utilities.

pub use self::collinear::{doubled_signed_area, is_collinear};

mod collinear;
