//! Scene documents: a tree of nodes plus the current selection
//!
//! Scenes are read from and written to TOML (the default) or JSON.

pub mod node;

pub use node::{LayoutMode, Node, NodeKind, Padding};

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SceneError;

/// Serialization format of a scene document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SceneFormat {
    #[default]
    Toml,
    Json,
}

impl SceneFormat {
    /// Pick the format from a file extension, defaulting to TOML
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => SceneFormat::Json,
            _ => SceneFormat::Toml,
        }
    }
}

/// A page of nodes and an ordered selection of node ids
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scene {
    #[serde(default)]
    pub selection: Vec<String>,
    #[serde(default)]
    pub nodes: Vec<Node>,
}

impl Scene {
    pub fn new(nodes: Vec<Node>) -> Self {
        Self {
            selection: Vec::new(),
            nodes,
        }
    }

    pub fn with_selection<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selection = ids.into_iter().map(Into::into).collect();
        self
    }

    /// Load a scene from a file, picking the format from its extension
    pub fn from_file(path: &Path) -> Result<Self, SceneError> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content, SceneFormat::from_path(path))
    }

    pub fn parse(content: &str, format: SceneFormat) -> Result<Self, SceneError> {
        match format {
            SceneFormat::Toml => Ok(toml::from_str(content)?),
            SceneFormat::Json => Ok(serde_json::from_str(content)?),
        }
    }

    pub fn to_text(&self, format: SceneFormat) -> Result<String, SceneError> {
        match format {
            SceneFormat::Toml => Ok(toml::to_string_pretty(self)?),
            SceneFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Find a node anywhere in the tree by id
    pub fn find(&self, id: &str) -> Option<&Node> {
        fn walk<'a>(nodes: &'a [Node], id: &str) -> Option<&'a Node> {
            nodes
                .iter()
                .find_map(|n| if n.id == id { Some(n) } else { walk(&n.children, id) })
        }
        walk(&self.nodes, id)
    }

    /// Selected nodes, in selection order.
    ///
    /// A selected node's descendants are not searched, so a node nested
    /// inside another selected node is not returned.
    pub fn selected_mut(&mut self) -> Vec<&mut Node> {
        self.selected_matching(&|_: &Node| true)
    }

    /// Selected nodes accepted by `accept`, in selection order.
    ///
    /// Descendants of an accepted node are not searched. A selected node
    /// that `accept` rejects is searched like any other, so an accepted node
    /// nested inside it is still found.
    pub fn selected_matching(&mut self, accept: &dyn Fn(&Node) -> bool) -> Vec<&mut Node> {
        let mut found = Vec::new();
        collect_selected(&mut self.nodes, &self.selection, accept, &mut found);
        found.sort_by_key(|(rank, _)| *rank);
        found.into_iter().map(|(_, node)| node).collect()
    }
}

fn collect_selected<'a>(
    nodes: &'a mut [Node],
    selection: &[String],
    accept: &dyn Fn(&Node) -> bool,
    found: &mut Vec<(usize, &'a mut Node)>,
) {
    for node in nodes.iter_mut() {
        let rank = selection.iter().position(|id| *id == node.id);
        match rank {
            Some(rank) if accept(node) => found.push((rank, node)),
            _ => collect_selected(&mut node.children, selection, accept, found),
        }
    }
}
