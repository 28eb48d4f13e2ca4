//! Offset resizing of containers
//!
//! Moves and resizes a container so its edges sit a fixed distance from its
//! content, without moving the content on screen. Freeform containers are
//! measured with [`compute_bounds`]; directional (auto-layout) containers
//! express the same thing through their padding.

pub mod batch;
pub mod config;
pub mod error;
pub mod params;

pub use batch::{
    resize_selection, run_with_parameters, BatchSummary, ContainerSelection, Host,
    RecordingHost, SelectionProvider,
};
pub use config::{ConfigError, ResizeConfig};
pub use error::ResizeError;
pub use params::{parse_offset, parse_optional_offset, suggest, OffsetPair, ParameterValues};

use tracing::debug;

use crate::geometry::{compute_bounds, AffineTransform, BoundingRect};
use crate::scene::{Node, Padding};

/// What [`apply_offset`] did to a container
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResizeOutcome {
    /// Freeform container fitted around the given content bounds
    Freeform { bounds: BoundingRect },
    /// Directional container whose padding was replaced
    Directional { previous: Padding },
    /// Container without children, left untouched
    Empty,
}

impl ResizeOutcome {
    pub fn is_resized(&self) -> bool {
        !matches!(self, ResizeOutcome::Empty)
    }
}

/// Resize `parent` so its edges sit `vertical` units above and below its
/// content and `horizontal` units to either side.
///
/// `horizontal` defaults to `vertical`.
pub fn apply_offset(parent: &mut Node, vertical: u32, horizontal: Option<u32>) -> ResizeOutcome {
    apply_offset_pair(parent, OffsetPair::new(vertical, horizontal))
}

/// [`apply_offset`] with already resolved offsets
pub fn apply_offset_pair(parent: &mut Node, offsets: OffsetPair) -> ResizeOutcome {
    if !parent.has_children() {
        debug!(container = parent.label(), "no children, nothing to resize");
        return ResizeOutcome::Empty;
    }

    let v = f64::from(offsets.vertical);
    let h = f64::from(offsets.horizontal);

    let outcome = if parent.layout_mode.is_directional() {
        fit_directional(parent, v, h)
    } else {
        fit_freeform(parent, v, h)
    };

    debug!(container = parent.label(), ?outcome, "resized");
    outcome
}

fn fit_freeform(parent: &mut Node, v: f64, h: f64) -> ResizeOutcome {
    let bounds = compute_bounds(&parent.children);

    // A container without a placement sits at its parent's origin
    parent
        .transform
        .get_or_insert(AffineTransform::IDENTITY)
        .translate(bounds.x - h, bounds.y - v);
    parent.resize_without_constraints(bounds.width + 2.0 * h, bounds.height + 2.0 * v);

    // Children live in the parent's space, which just moved
    for child in &mut parent.children {
        if !child.translate(h - bounds.x, v - bounds.y) {
            debug!(node = child.label(), "child has no transform, not moved");
        }
    }

    ResizeOutcome::Freeform { bounds }
}

fn fit_directional(parent: &mut Node, v: f64, h: f64) -> ResizeOutcome {
    let previous = parent.padding;

    parent
        .transform
        .get_or_insert(AffineTransform::IDENTITY)
        .translate(previous.left - h, previous.top - v);
    parent.padding = Padding::symmetric(v, h);

    ResizeOutcome::Directional { previous }
}
