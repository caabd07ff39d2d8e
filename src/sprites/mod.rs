//! Sprites module for player animation playback.
//!
//! This module handles:
//! - Loading the clip manifest from JSON
//! - Mapping controller animation states to clips
//! - Frame progression with walk-speed scaled playback

pub mod animation;
pub mod manifest;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;

use crate::core::GameState;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SpriteManifest>()
            .add_message::<AnimationStateChanged>()
            .add_systems(Startup, load_sprite_manifest)
            .add_systems(
                Update,
                (select_player_animation, update_animation_frames)
                    .chain()
                    .run_if(in_state(GameState::Run)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, log_animation_changes);
    }
}

/// System to load the sprite manifest at startup.
fn load_sprite_manifest(
    mut manifest: ResMut<SpriteManifest>,
    asset_server: Res<AssetServer>,
    mut layouts: ResMut<Assets<TextureAtlasLayout>>,
) {
    manifest.load_from_file("assets/sprites/zangoose.json", &asset_server, &mut layouts);
}
