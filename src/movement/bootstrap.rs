//! Movement domain: player bootstrap from loaded content.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::movement::controller::{AnimationState, JumpGroundController};
use crate::movement::{FootCollider, GameLayer, Player, PlayerController};
use crate::sprites::{AnimationController, placeholder_color};

/// Spawn the player from ContentRegistry data when a run starts.
pub(crate) fn spawn_player(
    mut commands: Commands,
    registry: Res<ContentRegistry>,
    existing_player: Query<Entity, With<Player>>,
) {
    // Don't spawn if player already exists
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let def = &registry.player;
    let controller = match JumpGroundController::new(def.controller.clone()) {
        Ok(controller) => controller,
        Err(e) => {
            error!("Cannot spawn player: {}", e);
            return;
        }
    };

    let (width, height) = def.body.size;
    let (foot_width, foot_height) = def.body.foot_size;
    let (x, y) = def.spawn;
    let player_layers = CollisionLayers::new(GameLayer::Player, [GameLayer::Terrain]);

    info!(
        "Spawning player at ({}, {}): leeway={:.3}s, max_hold={:.3}s, walk_max_speed={}",
        x,
        y,
        controller.jump_leeway(),
        controller.max_hold_time(),
        def.controller.walk_max_speed
    );

    commands
        .spawn((
            // Identity & Movement
            (Player, PlayerController(controller), Name::new("Player")),
            // Rendering
            (
                Sprite {
                    color: placeholder_color(AnimationState::Idle),
                    custom_size: Some(Vec2::new(width, height)),
                    ..default()
                },
                AnimationController::default(),
            ),
            Transform::from_xyz(x, y, 0.0),
            // Physics
            (
                RigidBody::Dynamic,
                Collider::rectangle(width, height),
                Mass(def.body.mass),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                player_layers,
            ),
        ))
        .with_children(|parent| {
            parent.spawn((
                FootCollider {
                    half_extents: Vec2::new(foot_width, foot_height) * 0.5,
                },
                Collider::rectangle(foot_width, foot_height),
                Transform::from_xyz(0.0, def.body.foot_offset, 0.0),
                player_layers,
            ));
        });
}
