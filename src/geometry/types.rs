//! Core geometric types: points, affine transforms and bounding rectangles

use serde::{Deserialize, Serialize};

/// A 2D point in a parent's local coordinate space
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2×3 affine matrix `[[c0, s0, x], [s1, c1, y]]`.
///
/// Maps a point `(px, py)` in a node's local frame into its parent's space:
///
/// ```text
/// x' = c0 * px + s0 * py + x
/// y' = s1 * px + c1 * py + y
/// ```
///
/// The translation `(x, y)` is where the node's local origin (its
/// pre-rotation top-left corner) lands in the parent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "[[f64; 3]; 2]", into = "[[f64; 3]; 2]")]
pub struct AffineTransform {
    pub c0: f64,
    pub s0: f64,
    pub x: f64,
    pub s1: f64,
    pub c1: f64,
    pub y: f64,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        c0: 1.0,
        s0: 0.0,
        x: 0.0,
        s1: 0.0,
        c1: 1.0,
        y: 0.0,
    };

    /// Pure translation
    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the local origin, placed at `(x, y)`.
    ///
    /// Uses the y-down convention: positive angles turn clockwise on screen.
    pub fn rotation(angle_degrees: f64, x: f64, y: f64) -> Self {
        let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();
        Self {
            c0: cos_a,
            s0: -sin_a,
            x,
            s1: sin_a,
            c1: cos_a,
            y,
        }
    }

    /// Non-uniform scale about the local origin, placed at `(x, y)`
    pub fn scale(sx: f64, sy: f64, x: f64, y: f64) -> Self {
        Self {
            c0: sx,
            s0: 0.0,
            x,
            s1: 0.0,
            c1: sy,
            y,
        }
    }

    /// Translation component
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// True when the matrix is exactly `[[1, 0, 0], [0, 1, 0]]`
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// True when the linear (rotation/scale) part is the identity,
    /// regardless of translation
    pub fn has_identity_linear(&self) -> bool {
        self.c0 == 1.0 && self.s0 == 0.0 && self.s1 == 0.0 && self.c1 == 1.0
    }

    /// Map a local point into parent space
    pub fn apply(&self, point: Point) -> Point {
        Point {
            x: self.c0 * point.x + self.s0 * point.y + self.x,
            y: self.s1 * point.x + self.c1 * point.y + self.y,
        }
    }

    /// Shift the translation component
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.x += dx;
        self.y += dy;
    }
}

impl Default for AffineTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[[f64; 3]; 2]> for AffineTransform {
    fn from(m: [[f64; 3]; 2]) -> Self {
        Self {
            c0: m[0][0],
            s0: m[0][1],
            x: m[0][2],
            s1: m[1][0],
            c1: m[1][1],
            y: m[1][2],
        }
    }
}

impl From<AffineTransform> for [[f64; 3]; 2] {
    fn from(t: AffineTransform) -> Self {
        [[t.c0, t.s0, t.x], [t.s1, t.c1, t.y]]
    }
}

/// Axis-aligned rectangle in a parent's local space.
///
/// Always satisfies `x2 == x + width` and `y2 == y + height`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRect {
    pub x: f64,
    pub y: f64,
    pub x2: f64,
    pub y2: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingRect {
    /// Build from opposite corners; the corners may be given in any order
    pub fn from_corners(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        let x = min_x.min(max_x);
        let y = min_y.min(max_y);
        let x2 = min_x.max(max_x);
        let y2 = min_y.max(max_y);
        Self {
            x,
            y,
            x2,
            y2,
            width: x2 - x,
            height: y2 - y,
        }
    }

    /// Build from origin and size
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self::from_corners(x, y, x + width, y + height)
    }

    /// The degenerate all-zero rectangle
    pub fn zero() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            x2: 0.0,
            y2: 0.0,
            width: 0.0,
            height: 0.0,
        }
    }

    /// Smallest rectangle covering a set of points, `None` for no points
    pub fn enclosing(points: &[Point]) -> Option<Self> {
        if points.is_empty() {
            return None;
        }
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);
        Some(Self::from_corners(min_x, min_y, max_x, max_y))
    }

    /// Smallest rectangle covering both
    pub fn union(&self, other: &BoundingRect) -> BoundingRect {
        BoundingRect::from_corners(
            self.x.min(other.x),
            self.y.min(other.y),
            self.x2.max(other.x2),
            self.y2.max(other.y2),
        )
    }

    /// Center point
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

impl Default for BoundingRect {
    fn default() -> Self {
        Self::zero()
    }
}
