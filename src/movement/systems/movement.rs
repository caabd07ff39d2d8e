//! Movement domain: fixed-tick controller update and body integration.

use avian2d::prelude::*;
use bevy::log::warn_once;
use bevy::prelude::*;

use crate::movement::controller::{BodyIntegrator, FootSpan, PhysicsIntegrator, TickInput};
use crate::movement::systems::collisions::TerrainProbe;
use crate::movement::{FootCollider, MovementInput, Player, PlayerController};

/// Current foot span of a body, from the first child carrying a foot collider.
pub(crate) fn body_foot_span(
    position: &Position,
    children: &Children,
    feet: &Query<(&FootCollider, &Transform)>,
) -> Option<FootSpan> {
    children
        .iter()
        .find_map(|child| feet.get(child).ok())
        .map(|(foot, local)| foot.span(position.0, local))
}

/// Runs each player's controller for one fixed tick and applies the result
/// to its body and sprite.
pub(crate) fn advance_player_controllers(
    time: Res<Time>,
    input: Res<MovementInput>,
    spatial_query: SpatialQuery,
    feet: Query<(&FootCollider, &Transform)>,
    mut players: Query<
        (
            &mut PlayerController,
            &mut LinearVelocity,
            &ComputedMass,
            &Position,
            &Children,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let dt = time.delta_secs();
    let now = time.elapsed_secs();
    let probe = TerrainProbe::new(&spatial_query);

    for (mut controller, mut velocity, mass, position, children, mut sprite) in &mut players {
        let Some(foot_span) = body_foot_span(position, children, &feet) else {
            warn_once!("Player has no foot collider, skipping controller update");
            continue;
        };

        let tick = TickInput {
            horizontal_axis: input.horizontal,
            jump_button_held: input.jump_held,
            current_vertical_velocity: velocity.y,
            current_horizontal_velocity: velocity.x,
            current_time: now,
            fixed_delta_time: dt,
            foot_span,
        };
        let output = controller.advance_fixed_tick(&tick, &probe);

        let mut body = BodyIntegrator {
            velocity: velocity.0,
            inverse_mass: mass.inverse(),
        };
        body.integrate(&output, controller.config().walk_max_speed, dt);
        velocity.0 = body.velocity;

        if output.flipped {
            sprite.flip_x = !output.facing_right;
        }
    }
}
