//! Movement domain: player controller plugin wiring and public exports.

mod bootstrap;
mod components;
pub mod controller;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{FootCollider, GameLayer, Player, PlayerController, Terrain};
pub use resources::MovementInput;

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::bootstrap::spawn_player;
use crate::movement::systems::{advance_player_controllers, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_systems(OnEnter(GameState::Run), spawn_player)
            .add_systems(
                FixedUpdate,
                (read_input, advance_player_controllers)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );
    }
}
