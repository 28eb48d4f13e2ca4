//! Scene nodes and their containment properties

use serde::{Deserialize, Serialize};

use crate::geometry::{AffineTransform, Point};

/// What a node is, as reported by the host document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    #[default]
    Frame,
    Component,
    ComponentSet,
    Group,
    Rectangle,
    Ellipse,
    Text,
    Vector,
    Other,
}

/// How a container positions its children
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Freeform: children sit at absolute coordinates
    #[default]
    None,
    /// Auto-layout along the x axis
    Horizontal,
    /// Auto-layout along the y axis
    Vertical,
}

impl LayoutMode {
    /// Directional containers keep content spacing in their padding
    pub fn is_directional(&self) -> bool {
        !matches!(self, LayoutMode::None)
    }
}

/// Edge-to-content spacing of a directional container
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Padding {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Padding {
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same padding on each axis: `vertical` top/bottom, `horizontal` left/right
    pub fn symmetric(vertical: f64, horizontal: f64) -> Self {
        Self::new(horizontal, horizontal, vertical, vertical)
    }

    pub fn uniform(value: f64) -> Self {
        Self::symmetric(value, value)
    }
}

/// A node in the scene tree.
///
/// Position is carried by the transform's translation. Any of `transform`,
/// `width` and `height` may be missing in hand-written or partially exported
/// documents; such nodes are left out of bounds computations.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default)]
    pub kind: NodeKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transform: Option<AffineTransform>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(default)]
    pub layout_mode: LayoutMode,
    #[serde(default)]
    pub padding: Padding,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(id: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            kind,
            ..Self::default()
        }
    }

    /// Freeform frame with the given children
    pub fn frame(id: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            transform: Some(AffineTransform::IDENTITY),
            children,
            ..Self::new(id, NodeKind::Frame)
        }
    }

    /// Rectangle placed at `(x, y)` without rotation
    pub fn rect(id: impl Into<String>, x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            transform: Some(AffineTransform::translation(x, y)),
            width: Some(width),
            height: Some(height),
            ..Self::new(id, NodeKind::Rectangle)
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_transform(mut self, transform: AffineTransform) -> Self {
        self.transform = Some(transform);
        self
    }

    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_layout(mut self, mode: LayoutMode, padding: Padding) -> Self {
        self.layout_mode = mode;
        self.padding = padding;
        self
    }

    /// Name for diagnostics: the display name, or the id when unnamed
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            self.id.as_str()
        } else {
            self.name.as_str()
        }
    }

    /// Position in the parent's space, if the node has a transform
    pub fn position(&self) -> Option<Point> {
        self.transform.map(|t| t.position())
    }

    /// Move the node by `(dx, dy)` in its parent's space.
    ///
    /// Returns false, leaving the node untouched, when it has no transform.
    pub fn translate(&mut self, dx: f64, dy: f64) -> bool {
        match self.transform.as_mut() {
            Some(t) => {
                t.translate(dx, dy);
                true
            }
            None => false,
        }
    }

    /// Set the size directly, without resizing children through constraints
    pub fn resize_without_constraints(&mut self, width: f64, height: f64) {
        self.width = Some(width);
        self.height = Some(height);
    }

    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}
