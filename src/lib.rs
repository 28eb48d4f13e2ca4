//! frame-fit - Resize containers to a fixed offset around their content
//!
//! This library measures the content of frames and components (including
//! rotated and scaled children) and moves and resizes the container so its
//! edges sit a chosen distance from that content. Freeform containers are
//! resized around the bounding box of their children; auto-layout containers
//! get their padding rewritten instead.
//!
//! # Example
//!
//! ```rust
//! use frame_fit::{fit, ParameterValues};
//!
//! let scene = r#"
//! selection = ["card"]
//!
//! [[nodes]]
//! id = "card"
//! transform = [[1, 0, 0], [0, 1, 0]]
//! width = 200
//! height = 200
//!
//! [[nodes.children]]
//! id = "title"
//! kind = "text"
//! transform = [[1, 0, 10], [0, 1, 10]]
//! width = 40
//! height = 20
//! "#;
//!
//! let resized = fit(scene, &ParameterValues::new("8")).unwrap();
//! assert!(resized.contains("width = 56.0"));
//! ```

pub mod error;
pub mod geometry;
pub mod resize;
pub mod scene;

pub use error::SceneError;
pub use geometry::{compute_bounds, AffineTransform, BoundingRect, Point};
pub use resize::{
    apply_offset, resize_selection, run_with_parameters, BatchSummary, ContainerSelection, Host,
    OffsetPair, ParameterValues, RecordingHost, ResizeConfig, ResizeError, ResizeOutcome,
    SelectionProvider,
};
pub use scene::{LayoutMode, Node, NodeKind, Padding, Scene, SceneFormat};

use thiserror::Error;

/// Errors that can occur in the fit pipeline
#[derive(Debug, Error)]
pub enum FitError {
    /// Error reading or writing the scene
    #[error("scene error: {0}")]
    Scene(#[from] SceneError),

    /// Error before resizing (empty selection, bad offsets)
    #[error("resize error: {0}")]
    Resize(#[from] ResizeError),
}

/// Configuration for the complete fit pipeline
#[derive(Debug, Clone, Default)]
pub struct FitConfig {
    /// Resize configuration
    pub resize: ResizeConfig,
    /// Scene input and output format
    pub format: SceneFormat,
}

impl FitConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the resize configuration
    pub fn with_resize(mut self, config: ResizeConfig) -> Self {
        self.resize = config;
        self
    }

    /// Set the scene format
    pub fn with_format(mut self, format: SceneFormat) -> Self {
        self.format = format;
        self
    }
}

/// Resize the selected containers of a TOML scene with default configuration,
/// returning the updated scene
pub fn fit(source: &str, params: &ParameterValues) -> Result<String, FitError> {
    fit_with_config(source, params, &FitConfig::default(), &mut RecordingHost::new())
}

/// Resize the selected containers of a scene document.
///
/// Parses `source`, resizes the selection reported by [`ContainerSelection`]
/// and serializes the updated scene in the same format. Notifications go to
/// `host`.
pub fn fit_with_config(
    source: &str,
    params: &ParameterValues,
    config: &FitConfig,
    host: &mut dyn Host,
) -> Result<String, FitError> {
    let mut scene = Scene::parse(source, config.format)?;

    let mut selection = ContainerSelection::new(&mut scene, &config.resize);
    run_with_parameters(&mut selection, params, host)?;

    Ok(scene.to_text(config.format)?)
}

/// Offset suggestions for an in-progress entry against a scene document
pub fn suggestions(source: &str, query: &str, config: &FitConfig) -> Result<Vec<String>, FitError> {
    let mut scene = Scene::parse(source, config.format)?;
    let selected = ContainerSelection::new(&mut scene, &config.resize)
        .selection()
        .len();
    Ok(resize::suggest(query, &config.resize.presets, selected)?)
}
