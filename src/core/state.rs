//! Core domain: game state definitions for the app flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content is loading.
    #[default]
    Boot,
    Run,
}
