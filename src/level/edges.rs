//! Level domain: static edge boundaries and their debug overlay.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::EdgeDef;
use crate::movement::{GameLayer, Terrain};

/// Overlay colour when an edge does not name one.
pub const DEFAULT_EDGE_COLOR: Color = Color::srgb(0.0, 1.0, 1.0);

/// Ordered point list backing a polyline collider.
#[derive(Component, Debug, Clone)]
pub struct EdgeBoundary {
    pub points: Vec<Vec2>,
}

/// Line overlay mirroring an edge's points.
#[derive(Component, Debug, Clone, Copy)]
pub struct EdgeOverlay {
    pub color: Color,
}

/// Collider vertices for an edge, in the order given.
pub fn edge_vertices(def: &EdgeDef) -> Vec<Vec2> {
    def.points.iter().map(|&(x, y)| Vec2::new(x, y)).collect()
}

/// Overlay for an edge, if it asked for one.
pub fn edge_overlay(def: &EdgeDef) -> Option<EdgeOverlay> {
    if !def.show_edges {
        return None;
    }
    let color = match def.line_color {
        Some((r, g, b)) => Color::srgb(r, g, b),
        None => DEFAULT_EDGE_COLOR,
    };
    Some(EdgeOverlay { color })
}

pub(crate) fn spawn_edge(commands: &mut Commands, level_id: &str, def: &EdgeDef) -> Entity {
    let points = edge_vertices(def);
    let (x, y) = def.position;

    let mut entity = commands.spawn((
        Name::new(format!("{}_edge", level_id)),
        Terrain,
        EdgeBoundary {
            points: points.clone(),
        },
        Transform::from_xyz(x, y, 0.0),
        RigidBody::Static,
        Collider::polyline(points, None),
        CollisionLayers::new(GameLayer::Terrain, [GameLayer::Player]),
    ));

    if let Some(overlay) = edge_overlay(def) {
        if def.line_color.is_none() {
            warn!(
                "Edge in '{}' shows its overlay without a line_color, using cyan",
                level_id
            );
        }
        entity.insert(overlay);
    }

    entity.id()
}

/// Toggle for every edge overlay in the level.
#[derive(Resource, Debug)]
pub struct EdgeOverlaySettings {
    pub visible: bool,
}

impl Default for EdgeOverlaySettings {
    fn default() -> Self {
        Self { visible: true }
    }
}

/// Edge points carried into world space by the edge's transform.
pub fn overlay_points(boundary: &EdgeBoundary, transform: &GlobalTransform) -> Vec<Vec2> {
    boundary
        .points
        .iter()
        .map(|p| transform.transform_point(p.extend(0.0)).truncate())
        .collect()
}

pub(crate) fn draw_edge_overlays(
    mut gizmos: Gizmos,
    settings: Res<EdgeOverlaySettings>,
    edges: Query<(&EdgeBoundary, &EdgeOverlay, &GlobalTransform)>,
) {
    if !settings.visible {
        return;
    }

    for (boundary, overlay, transform) in &edges {
        gizmos.linestrip_2d(overlay_points(boundary, transform), overlay.color);
    }
}
