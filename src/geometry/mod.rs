//! Geometry for transformed rectangles
//!
//! This module maps node rectangles through their affine transforms and
//! computes the axis-aligned box enclosing a set of them.

pub mod bounds;
pub mod transform;
pub mod types;

pub use bounds::{compute_bounds, node_extent, SkipReason};
pub use transform::CenteredTransform;
pub use types::*;
