//! Movement domain: input resources.

use bevy::prelude::*;

/// Raw input sampled once per fixed tick.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Unsmoothed horizontal axis in `[-1, 1]`.
    pub horizontal: f32,
    /// Held state, not edge-triggered.
    pub jump_held: bool,
}
