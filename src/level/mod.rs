//! Level domain: terrain spawning from level data.

mod edges;

#[cfg(test)]
mod tests;

use edges::EdgeOverlaySettings;

use bevy::prelude::*;

use crate::content::ContentRegistry;
use crate::core::GameState;
use crate::level::edges::{draw_edge_overlays, spawn_edge};

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EdgeOverlaySettings>()
            .add_systems(OnEnter(GameState::Run), spawn_level)
            .add_systems(
                Update,
                draw_edge_overlays.run_if(in_state(GameState::Run)),
            );

        #[cfg(feature = "dev-tools")]
        app.add_systems(Update, toggle_edge_overlays);
    }
}

fn spawn_level(mut commands: Commands, registry: Res<ContentRegistry>) {
    let Some(level) = registry.current_level() else {
        error!("No level to spawn");
        return;
    };

    for edge in &level.edges {
        spawn_edge(&mut commands, &level.id, edge);
    }

    info!(
        "Spawned level '{}' ({}) with {} edges",
        level.id,
        level.name,
        level.edges.len()
    );
}

/// F3 hides or shows every edge overlay.
#[cfg(feature = "dev-tools")]
fn toggle_edge_overlays(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut settings: ResMut<EdgeOverlaySettings>,
) {
    if keyboard.just_pressed(KeyCode::F3) {
        settings.visible = !settings.visible;
        info!("Edge overlays visible: {}", settings.visible);
    }
}
