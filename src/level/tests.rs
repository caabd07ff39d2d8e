//! Level domain: tests for edge collider and overlay setup.

use bevy::prelude::*;

use super::edges::{DEFAULT_EDGE_COLOR, EdgeBoundary, edge_overlay, edge_vertices, overlay_points};
use crate::content::EdgeDef;

fn edge(points: Vec<(f32, f32)>) -> EdgeDef {
    EdgeDef {
        points,
        position: (0.0, 0.0),
        show_edges: false,
        line_color: None,
    }
}

#[test]
fn test_edge_vertices_keep_order_and_values() {
    let def = edge(vec![(3.0, 1.0), (-2.5, 0.0), (-2.5, 4.0), (3.0, 1.0)]);

    let vertices = edge_vertices(&def);

    assert_eq!(
        vertices,
        vec![
            Vec2::new(3.0, 1.0),
            Vec2::new(-2.5, 0.0),
            Vec2::new(-2.5, 4.0),
            Vec2::new(3.0, 1.0),
        ]
    );
}

#[test]
fn test_no_overlay_unless_requested() {
    let def = edge(vec![(0.0, 0.0), (1.0, 0.0)]);
    assert!(edge_overlay(&def).is_none());
}

#[test]
fn test_overlay_defaults_to_cyan() {
    let mut def = edge(vec![(0.0, 0.0), (1.0, 0.0)]);
    def.show_edges = true;

    let overlay = edge_overlay(&def).unwrap();

    assert_eq!(overlay.color, DEFAULT_EDGE_COLOR);
}

#[test]
fn test_overlay_uses_configured_color() {
    let mut def = edge(vec![(0.0, 0.0), (1.0, 0.0)]);
    def.show_edges = true;
    def.line_color = Some((1.0, 0.5, 0.0));

    let overlay = edge_overlay(&def).unwrap();

    assert_eq!(overlay.color, Color::srgb(1.0, 0.5, 0.0));
}

#[test]
fn test_overlay_points_follow_edge_position() {
    let boundary = EdgeBoundary {
        points: vec![Vec2::new(0.0, 0.0), Vec2::new(2.0, 1.0)],
    };
    let transform = GlobalTransform::from(Transform::from_xyz(-4.0, 3.0, 0.0));

    let points = overlay_points(&boundary, &transform);

    assert_eq!(points, vec![Vec2::new(-4.0, 3.0), Vec2::new(-2.0, 4.0)]);
}
