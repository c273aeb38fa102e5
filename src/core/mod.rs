//! Core geometry types.
//!
//! - [`Point3`]: distance, midpoint, offset
//! - [`Bounds3`]: axis-aligned boxes and the conservative segment test
//! - [`intervals_overlap`]: the per-axis interval check behind it

mod bounds;
mod point;

pub use bounds::{BoxContact, Bounds3, intervals_overlap};
pub use point::Point3;
