//! Resizing a whole selection and reporting back to the host
//!
//! The host supplies the selection and receives notifications; both are
//! passed in explicitly so the batch logic never reaches for global state.

use std::fmt;

use tracing::{info, instrument};

use super::apply_offset_pair;
use super::config::ResizeConfig;
use super::error::ResizeError;
use super::params::{OffsetPair, ParameterValues};
use crate::scene::{Node, Scene};

/// Supplies the containers to resize, in order
pub trait SelectionProvider {
    fn selection(&mut self) -> Vec<&mut Node>;
}

/// Notification sink and lifecycle signal of the embedding host
pub trait Host {
    /// Show a human-readable message
    fn notify(&mut self, message: &str);

    /// Signal that processing is finished
    fn close(&mut self, message: Option<&str>);
}

/// Host that records everything it is told
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordingHost {
    pub notifications: Vec<String>,
    pub closed: bool,
    pub close_message: Option<String>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Most recent notification
    pub fn last_notification(&self) -> Option<&str> {
        self.notifications.last().map(String::as_str)
    }
}

impl Host for RecordingHost {
    fn notify(&mut self, message: &str) {
        self.notifications.push(message.to_string());
    }

    fn close(&mut self, message: Option<&str>) {
        self.closed = true;
        self.close_message = message.map(str::to_string);
    }
}

/// Selected containers of a scene: selected nodes whose kind is a container
/// kind and which have at least one child
pub struct ContainerSelection<'a> {
    scene: &'a mut Scene,
    config: &'a ResizeConfig,
}

impl<'a> ContainerSelection<'a> {
    pub fn new(scene: &'a mut Scene, config: &'a ResizeConfig) -> Self {
        Self { scene, config }
    }
}

impl SelectionProvider for ContainerSelection<'_> {
    fn selection(&mut self) -> Vec<&mut Node> {
        let config = self.config;
        self.scene.selected_matching(&|node: &Node| {
            config.is_container_kind(node.kind) && node.has_children()
        })
    }
}

/// Result of resizing a selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchSummary {
    /// Containers that were moved or resized
    pub resized: usize,
    /// Containers left alone because they had no children
    pub skipped: usize,
}

impl BatchSummary {
    /// Message reported to the user
    pub fn message(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.resized == 1 {
            write!(f, "1 layer resized")
        } else {
            write!(f, "{} layers resized", self.resized)
        }
    }
}

/// Resize every container in `selection`, one after the other.
///
/// An empty selection is reported to the host and nothing is mutated.
/// On success the host receives the summary and a close signal.
#[instrument(skip(selection, host), fields(count = selection.len()))]
pub fn resize_selection(
    selection: Vec<&mut Node>,
    offsets: OffsetPair,
    host: &mut dyn Host,
) -> Result<BatchSummary, ResizeError> {
    if selection.is_empty() {
        return Err(abort(host, ResizeError::EmptySelection));
    }

    let mut summary = BatchSummary {
        resized: 0,
        skipped: 0,
    };
    for container in selection {
        if apply_offset_pair(container, offsets).is_resized() {
            summary.resized += 1;
        } else {
            summary.skipped += 1;
        }
    }

    let message = summary.message();
    info!(resized = summary.resized, skipped = summary.skipped, "{}", message);
    host.notify(&message);
    host.close(Some(&message));
    Ok(summary)
}

/// Resize the provider's selection using raw parameter strings.
///
/// The selection is checked before the parameters, so an empty selection is
/// reported even when the parameters are also invalid.
pub fn run_with_parameters(
    provider: &mut dyn SelectionProvider,
    params: &ParameterValues,
    host: &mut dyn Host,
) -> Result<BatchSummary, ResizeError> {
    let selection = provider.selection();
    if selection.is_empty() {
        return Err(abort(host, ResizeError::EmptySelection));
    }

    let offsets = params.offsets().map_err(|e| abort(host, e))?;
    resize_selection(selection, offsets, host)
}

/// Report an error to the host and close without a summary
fn abort(host: &mut dyn Host, error: ResizeError) -> ResizeError {
    host.notify(error.user_message());
    host.close(None);
    error
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Point;
    use crate::resize::error::EMPTY_SELECTION_MESSAGE;
    use crate::scene::{LayoutMode, NodeKind, Padding};

    fn freeform(id: &str, children: Vec<Node>) -> Node {
        Node::frame(id, children)
    }

    #[test]
    fn test_summary_message() {
        let one = BatchSummary { resized: 1, skipped: 0 };
        let many = BatchSummary { resized: 3, skipped: 1 };
        let none = BatchSummary { resized: 0, skipped: 2 };
        assert_eq!(one.message(), "1 layer resized");
        assert_eq!(many.message(), "3 layers resized");
        assert_eq!(none.message(), "0 layers resized");
    }

    #[test]
    fn test_empty_selection_reports_and_stops() {
        let mut host = RecordingHost::new();
        let result = resize_selection(Vec::new(), OffsetPair::uniform(8), &mut host);

        assert_eq!(result, Err(ResizeError::EmptySelection));
        assert_eq!(host.last_notification(), Some(EMPTY_SELECTION_MESSAGE));
        assert!(host.closed);
        assert_eq!(host.close_message, None);
    }

    #[test]
    fn test_counts_only_resized_containers() {
        let mut a = freeform("a", vec![Node::rect("a1", 0.0, 0.0, 10.0, 10.0)]);
        let mut empty = freeform("empty", vec![]);
        let mut b = freeform("b", vec![Node::rect("b1", 5.0, 5.0, 10.0, 10.0)]);
        let empty_before = empty.clone();
        let mut host = RecordingHost::new();

        let summary =
            resize_selection(vec![&mut a, &mut empty, &mut b], OffsetPair::uniform(8), &mut host)
                .expect("Should resize");

        assert_eq!(summary, BatchSummary { resized: 2, skipped: 1 });
        assert_eq!(host.last_notification(), Some("2 layers resized"));
        assert_eq!(host.close_message.as_deref(), Some("2 layers resized"));
        assert_eq!(empty, empty_before);
        assert_eq!(a.width, Some(26.0));
        assert_eq!(b.children[0].position(), Some(Point::new(8.0, 8.0)));
    }

    #[test]
    fn test_container_selection_filters_kinds_and_empty() {
        let mut scene = Scene::new(vec![
            freeform("frame", vec![Node::rect("r", 0.0, 0.0, 1.0, 1.0)]),
            freeform("bare", vec![]),
            Node {
                kind: NodeKind::Group,
                ..freeform("group", vec![Node::rect("g", 0.0, 0.0, 1.0, 1.0)])
            },
            Node::rect("rect", 0.0, 0.0, 1.0, 1.0),
        ])
        .with_selection(["rect", "group", "bare", "frame"]);
        let config = ResizeConfig::default();

        let mut provider = ContainerSelection::new(&mut scene, &config);
        let ids: Vec<String> = provider.selection().iter().map(|n| n.id.clone()).collect();

        assert_eq!(ids, vec!["frame".to_string()]);
    }

    #[test]
    fn test_container_selection_finds_frame_inside_selected_group() {
        let inner = freeform("inner", vec![Node::rect("r", 2.0, 2.0, 4.0, 4.0)]);
        let mut scene = Scene::new(vec![Node {
            kind: NodeKind::Group,
            ..freeform("group", vec![inner])
        }])
        .with_selection(["group", "inner"]);
        let config = ResizeConfig::default();
        let mut host = RecordingHost::new();

        let summary = run_with_parameters(
            &mut ContainerSelection::new(&mut scene, &config),
            &ParameterValues::new("1"),
            &mut host,
        )
        .expect("Should resize");

        assert_eq!(summary.resized, 1);
        let inner = scene.find("inner").unwrap();
        assert_eq!((inner.width, inner.height), (Some(6.0), Some(6.0)));
        assert_eq!(inner.position(), Some(Point::new(1.0, 1.0)));
    }

    #[test]
    fn test_run_with_parameters_resizes_scene() {
        let mut scene = Scene::new(vec![Node::frame(
            "row",
            vec![Node::rect("r", 4.0, 4.0, 10.0, 10.0)],
        )
        .with_layout(LayoutMode::Horizontal, Padding::uniform(4.0))])
        .with_selection(["row"]);
        let config = ResizeConfig::default();
        let mut host = RecordingHost::new();

        let summary = run_with_parameters(
            &mut ContainerSelection::new(&mut scene, &config),
            &ParameterValues::new("16"),
            &mut host,
        )
        .expect("Should resize");

        assert_eq!(summary.resized, 1);
        assert_eq!(host.last_notification(), Some("1 layer resized"));
        let row = scene.find("row").unwrap();
        assert_eq!(row.padding, Padding::uniform(16.0));
        assert_eq!(row.position(), Some(Point::new(-12.0, -12.0)));
    }

    #[test]
    fn test_run_with_parameters_checks_selection_first() {
        let mut scene = Scene::default();
        let config = ResizeConfig::default();
        let mut host = RecordingHost::new();

        let result = run_with_parameters(
            &mut ContainerSelection::new(&mut scene, &config),
            &ParameterValues::new("oops"),
            &mut host,
        );

        assert_eq!(result, Err(ResizeError::EmptySelection));
        assert_eq!(host.last_notification(), Some(EMPTY_SELECTION_MESSAGE));
    }

    #[test]
    fn test_run_with_invalid_parameters_does_not_mutate() {
        let original = Scene::new(vec![freeform(
            "f",
            vec![Node::rect("r", 3.0, 3.0, 1.0, 1.0)],
        )])
        .with_selection(["f"]);
        let mut scene = original.clone();
        let config = ResizeConfig::default();
        let mut host = RecordingHost::new();

        let result = run_with_parameters(
            &mut ContainerSelection::new(&mut scene, &config),
            &ParameterValues::new("-2"),
            &mut host,
        );

        assert!(matches!(result, Err(ResizeError::InvalidOffset { .. })));
        assert_eq!(scene, original);
        assert_eq!(host.last_notification(), Some("Try entering a positive number"));
        assert!(host.closed);
    }
}
