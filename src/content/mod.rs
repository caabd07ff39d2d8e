//! Content domain: RON data loading, validation and the content registry.

mod data;
mod loader;
mod registry;
mod validation;


pub use data::EdgeDef;
pub use loader::load_all_content;
pub use registry::ContentRegistry;
pub use validation::validate_content;

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

const CONTENT_DIR: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content);
    }
}

/// Load content, fall back to built-in data on any error, then start the run.
fn load_content(
    mut commands: Commands,
    mut fixed_time: ResMut<Time<Fixed>>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    let registry = match load_all_content(Path::new(CONTENT_DIR)) {
        Ok(registry) => {
            let errors = validate_content(&registry);
            if errors.is_empty() {
                registry
            } else {
                for e in &errors {
                    error!("Content validation: {}", e);
                }
                warn!("Content failed validation, using built-in defaults");
                ContentRegistry::default()
            }
        }
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            warn!("Content could not be loaded, using built-in defaults");
            ContentRegistry::default()
        }
    };

    info!("{}", registry.summary());

    let tick_rate = registry.player.controller.tick_rate;
    fixed_time.set_timestep_hz(tick_rate as f64);
    info!("Fixed timestep set to {} Hz", tick_rate);

    commands.insert_resource(registry);
    next_state.set(GameState::Run);
}
