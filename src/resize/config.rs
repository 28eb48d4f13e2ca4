//! Configuration for offset resizing
//!
//! Loaded from TOML:
//!
//! ```toml
//! [offsets]
//! presets = [8, 16, 24, 48, 64]
//!
//! [selection]
//! container_kinds = ["frame", "component", "component_set"]
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::scene::NodeKind;

/// Errors that can occur when loading a configuration file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Configuration options for offset resizing
#[derive(Debug, Clone, PartialEq)]
pub struct ResizeConfig {
    /// Offsets offered as suggestions during interactive entry
    pub presets: Vec<u32>,

    /// Node kinds the selection provider treats as containers
    pub container_kinds: Vec<NodeKind>,
}

/// TOML structure for deserializing configuration
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlConfig {
    offsets: Option<TomlOffsets>,
    selection: Option<TomlSelection>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlOffsets {
    presets: Option<Vec<u32>>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TomlSelection {
    container_kinds: Option<Vec<NodeKind>>,
}

impl Default for ResizeConfig {
    fn default() -> Self {
        Self {
            presets: vec![8, 16, 24, 48, 64],
            container_kinds: vec![NodeKind::Frame, NodeKind::Component, NodeKind::ComponentSet],
        }
    }
}

impl ResizeConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Load configuration from a TOML string; missing keys keep their defaults
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let parsed: TomlConfig = toml::from_str(content)?;
        let mut config = Self::default();

        if let Some(presets) = parsed.offsets.and_then(|o| o.presets) {
            config.presets = presets;
        }
        if let Some(kinds) = parsed.selection.and_then(|s| s.container_kinds) {
            config.container_kinds = kinds;
        }

        Ok(config)
    }

    /// Set the suggested offsets
    pub fn with_presets(mut self, presets: impl Into<Vec<u32>>) -> Self {
        self.presets = presets.into();
        self
    }

    /// Set which node kinds count as containers
    pub fn with_container_kinds(mut self, kinds: impl Into<Vec<NodeKind>>) -> Self {
        self.container_kinds = kinds.into();
        self
    }

    /// Whether nodes of this kind may be resized
    pub fn is_container_kind(&self, kind: NodeKind) -> bool {
        self.container_kinds.contains(&kind)
    }
}
