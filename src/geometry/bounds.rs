//! Tight bounding boxes for sets of transformed rectangles

use tracing::warn;

use crate::geometry::transform::CenteredTransform;
use crate::geometry::types::BoundingRect;
use crate::scene::Node;

/// Why a node was left out of a bounds computation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    MissingTransform,
    MissingSize,
}

/// Axis-aligned extent of a single node in its parent's space.
///
/// Nodes without a transform or without finite width/height have no extent.
pub fn node_extent(node: &Node) -> Result<BoundingRect, SkipReason> {
    let transform = node.transform.ok_or(SkipReason::MissingTransform)?;
    let (width, height) = match (node.width, node.height) {
        (Some(w), Some(h)) if w.is_finite() && h.is_finite() => (w, h),
        _ => return Err(SkipReason::MissingSize),
    };

    if transform.has_identity_linear() {
        return Ok(BoundingRect::new(transform.x, transform.y, width, height));
    }

    Ok(CenteredTransform::new(&transform, width, height).extent())
}

/// Compute the smallest axis-aligned rectangle enclosing every node.
///
/// Malformed nodes are reported and skipped. An empty list, or one where
/// every node was skipped, yields [`BoundingRect::zero`].
pub fn compute_bounds(nodes: &[Node]) -> BoundingRect {
    nodes
        .iter()
        .filter_map(|node| match node_extent(node) {
            Ok(extent) => Some(extent),
            Err(SkipReason::MissingTransform) => {
                warn!(node = node.label(), "node has no transform, skipping");
                None
            }
            Err(SkipReason::MissingSize) => {
                warn!(node = node.label(), "node has no width or height, skipping");
                None
            }
        })
        .reduce(|acc, extent| acc.union(&extent))
        .unwrap_or_default()
}
