//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use super::controller::{FootSpan, JumpGroundController};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Level geometry the ground probes look for
    Terrain,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Jump/ground state machine driving a player body.
#[derive(Component, Debug, Deref, DerefMut)]
pub struct PlayerController(pub JumpGroundController);

/// Child collider whose bottom edge is used for ground probing.
#[derive(Component, Debug, Clone, Copy)]
pub struct FootCollider {
    pub half_extents: Vec2,
}

impl FootCollider {
    /// Foot span in world space, placed from the body's physics position and
    /// the foot's offset on the body. Rotation is locked, so the box stays
    /// axis-aligned.
    ///
    /// `GlobalTransform` is only propagated once per frame and lags behind
    /// when a frame runs several fixed ticks, so it is not read here.
    pub fn span(&self, body_position: Vec2, local: &Transform) -> FootSpan {
        let center = body_position + local.translation.truncate();
        FootSpan::from_bounds(center - self.half_extents, center + self.half_extents)
    }
}

/// Marker for terrain colliders
#[derive(Component, Debug)]
pub struct Terrain;
