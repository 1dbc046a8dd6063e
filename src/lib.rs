/*!
sat2d
========

**sat2d** is a 2-dimensional convex collision detection library written with
the rust programming language. It implements narrow-phase overlap tests and
minimum translation vector (MTV) queries based on the separating axis
theorem, plus a simple tile-grid broad phase.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub mod math;
pub mod partitioning;
pub mod query;
pub mod shape;
pub mod utils;
