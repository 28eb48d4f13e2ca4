//! Corner mapping for rotated and scaled rectangles.
//!
//! A node stores its placement as an affine transform whose translation is
//! the node's pre-rotation top-left corner. To find where the node's four
//! corners land in the parent, we re-express the transform around the
//! node's center:
//!
//! 1. Take half extents `(w/2, h/2)`
//! 2. Move the translation to the transformed center:
//!    `x + w/2·c0 + h/2·s0`, `y + w/2·s1 + h/2·c1`
//! 3. Map the four corner offsets `(±w/2, ±h/2)` through the centered matrix
//! 4. Take the componentwise min/max of the mapped corners
//!
//! For a rectangle this is exact: the AABB of the four transformed corners
//! is the tight AABB of the transformed rectangle, since affine maps send
//! rectangles to parallelograms.

use crate::geometry::types::{AffineTransform, BoundingRect, Point};

/// Sign combinations for the four corners, relative to the center
const CORNER_SIGNS: [(f64, f64); 4] = [(1.0, 1.0), (-1.0, -1.0), (1.0, -1.0), (-1.0, 1.0)];

/// A node transform re-centered on the node's middle.
#[derive(Debug, Clone, Copy)]
pub struct CenteredTransform {
    matrix: AffineTransform,
    half_width: f64,
    half_height: f64,
}

impl CenteredTransform {
    /// Re-center `transform` for a `width × height` rectangle.
    pub fn new(transform: &AffineTransform, width: f64, height: f64) -> Self {
        let half_width = width / 2.0;
        let half_height = height / 2.0;
        let matrix = AffineTransform {
            x: transform.x + half_width * transform.c0 + half_height * transform.s0,
            y: transform.y + half_width * transform.s1 + half_height * transform.c1,
            ..*transform
        };
        Self {
            matrix,
            half_width,
            half_height,
        }
    }

    /// The four corners in parent space
    pub fn corners(&self) -> [Point; 4] {
        CORNER_SIGNS.map(|(sx, sy)| {
            self.matrix
                .apply(Point::new(sx * self.half_width, sy * self.half_height))
        })
    }

    /// Axis-aligned extent of the transformed rectangle
    pub fn extent(&self) -> BoundingRect {
        BoundingRect::enclosing(&self.corners()).unwrap_or_default()
    }
}
