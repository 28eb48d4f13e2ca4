//! Properties and scenarios of the offset resizer
//!
//! Covers content preservation, non-cumulative application, directional
//! containers and batch reporting.

use frame_fit::{
    apply_offset, compute_bounds, resize_selection, AffineTransform, BoundingRect, LayoutMode,
    Node, NodeKind, OffsetPair, Padding, Point, RecordingHost, ResizeOutcome,
};

const EPSILON: f64 = 1e-6;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn assert_point_approx(got: Option<Point>, want: Point) {
    let got = got.expect("node should have a position");
    assert!(
        approx_eq(got.x, want.x) && approx_eq(got.y, want.y),
        "expected ({}, {}), got ({}, {})",
        want.x,
        want.y,
        got.x,
        got.y
    );
}

fn assert_nodes_approx(got: &Node, want: &Node) {
    assert_eq!(got.id, want.id);
    assert_point_approx(got.position(), want.position().expect("reference position"));
    match (got.width, want.width) {
        (Some(a), Some(b)) => assert!(approx_eq(a, b), "{} width: {} vs {}", got.id, a, b),
        (a, b) => assert_eq!(a, b, "{} width", got.id),
    }
    match (got.height, want.height) {
        (Some(a), Some(b)) => assert!(approx_eq(a, b), "{} height: {} vs {}", got.id, a, b),
        (a, b) => assert_eq!(a, b, "{} height", got.id),
    }
    assert_eq!(got.padding, want.padding);
    assert_eq!(got.children.len(), want.children.len());
    for (g, w) in got.children.iter().zip(want.children.iter()) {
        assert_nodes_approx(g, w);
    }
}

fn rotated(id: &str, x: f64, y: f64, w: f64, h: f64, degrees: f64) -> Node {
    Node::new(id, NodeKind::Rectangle)
        .with_transform(AffineTransform::rotation(degrees, x, y))
        .with_size(w, h)
}

/// Freeform frame placed at (200, 150) with a mix of rotated and plain children
fn busy_frame() -> Node {
    Node::frame(
        "busy",
        vec![
            Node::rect("plain", 30.0, 40.0, 50.0, 10.0),
            rotated("tilted", 120.0, 60.0, 40.0, 20.0, 30.0),
            rotated("flipped", 10.0, 90.0, 25.0, 25.0, 200.0),
        ],
    )
    .with_transform(AffineTransform::translation(200.0, 150.0))
    .with_size(400.0, 300.0)
}

#[test]
fn test_scenario_single_child_offset_8() {
    let mut parent = Node::frame("p", vec![Node::rect("c", 10.0, 10.0, 40.0, 20.0)]);

    apply_offset(&mut parent, 8, None);

    assert_eq!(parent.width, Some(56.0));
    assert_eq!(parent.height, Some(36.0));
    assert_eq!(parent.children[0].position(), Some(Point::new(8.0, 8.0)));
    assert_eq!(
        compute_bounds(&parent.children),
        BoundingRect::new(8.0, 8.0, 40.0, 20.0)
    );
}

#[test]
fn test_content_size_preserved_and_offset_from_origin() {
    let mut parent = busy_frame();
    let before = compute_bounds(&parent.children);

    apply_offset(&mut parent, 12, Some(20));

    let after = compute_bounds(&parent.children);
    assert!(approx_eq(after.x, 20.0), "x: expected 20.0, got {}", after.x);
    assert!(approx_eq(after.y, 12.0), "y: expected 12.0, got {}", after.y);
    assert!(approx_eq(after.width, before.width));
    assert!(approx_eq(after.height, before.height));
    assert!(approx_eq(parent.width.unwrap(), before.width + 40.0));
    assert!(approx_eq(parent.height.unwrap(), before.height + 24.0));
}

#[test]
fn test_content_does_not_move_in_grandparent_space() {
    let mut parent = busy_frame();
    let origin = parent.position().unwrap();
    let absolute_before: Vec<Point> = parent
        .children
        .iter()
        .map(|c| {
            let p = c.position().unwrap();
            Point::new(origin.x + p.x, origin.y + p.y)
        })
        .collect();

    apply_offset(&mut parent, 5, Some(9));

    let origin = parent.position().unwrap();
    for (child, before) in parent.children.iter().zip(absolute_before) {
        let p = child.position().unwrap();
        assert_point_approx(Some(Point::new(origin.x + p.x, origin.y + p.y)), before);
    }
}

#[test]
fn test_freeform_offsets_are_not_cumulative() {
    let mut twice = busy_frame();
    let mut once = busy_frame();

    apply_offset(&mut twice, 30, Some(4));
    apply_offset(&mut twice, 6, Some(18));
    apply_offset(&mut once, 6, Some(18));

    assert_nodes_approx(&twice, &once);
}

#[test]
fn test_directional_offsets_are_not_cumulative() {
    let row = Node::frame(
        "row",
        vec![Node::rect("a", 3.0, 3.0, 10.0, 10.0)],
    )
    .with_transform(AffineTransform::translation(50.0, 50.0))
    .with_layout(LayoutMode::Horizontal, Padding::new(3.0, 7.0, 3.0, 1.0));
    let mut twice = row.clone();
    let mut once = row;

    apply_offset(&mut twice, 24, Some(2));
    apply_offset(&mut twice, 10, Some(16));
    apply_offset(&mut once, 10, Some(16));

    assert_eq!(twice, once);
}

#[test]
fn test_scenario_directional_padding_4_to_16() {
    let children = vec![
        Node::rect("a", 4.0, 4.0, 20.0, 20.0),
        rotated("b", 30.0, 4.0, 20.0, 20.0, 10.0),
    ];
    let mut parent = Node::frame("auto", children.clone())
        .with_transform(AffineTransform::translation(100.0, 100.0))
        .with_layout(LayoutMode::Vertical, Padding::uniform(4.0));

    let outcome = apply_offset(&mut parent, 16, Some(16));

    assert_eq!(
        outcome,
        ResizeOutcome::Directional {
            previous: Padding::uniform(4.0)
        }
    );
    assert_eq!(parent.padding, Padding::uniform(16.0));
    assert_eq!(parent.position(), Some(Point::new(88.0, 88.0)));
    // Only position and padding change
    assert_eq!(parent.children, children);
    assert_eq!(parent.width, None);
    assert_eq!(parent.height, None);
}

#[test]
fn test_scenario_three_containers_one_empty() {
    let mut first = Node::frame("first", vec![Node::rect("a", 0.0, 0.0, 10.0, 10.0)]);
    let mut empty = Node::frame("empty", vec![]).with_size(10.0, 10.0);
    let mut last = Node::frame("last", vec![Node::rect("b", 2.0, 2.0, 4.0, 4.0)])
        .with_layout(LayoutMode::Horizontal, Padding::uniform(2.0));
    let empty_before = empty.clone();
    let mut host = RecordingHost::new();

    let summary = resize_selection(
        vec![&mut first, &mut empty, &mut last],
        OffsetPair::uniform(8),
        &mut host,
    )
    .expect("Should resize");

    assert_eq!(summary.resized, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(empty, empty_before);
    insta::assert_snapshot!(host.notifications.join("\n"), @"2 layers resized");
    assert!(host.closed);
}

#[test]
fn test_malformed_child_does_not_abort_batch() {
    let mut parent = Node::frame(
        "p",
        vec![
            Node::new("ghost", NodeKind::Rectangle),
            Node::rect("real", 20.0, 20.0, 10.0, 10.0),
        ],
    );
    let mut host = RecordingHost::new();

    let summary = resize_selection(vec![&mut parent], OffsetPair::uniform(4), &mut host)
        .expect("Should resize");

    assert_eq!(summary.resized, 1);
    assert_eq!(parent.width, Some(18.0));
    assert_eq!(parent.children[1].position(), Some(Point::new(4.0, 4.0)));
}
