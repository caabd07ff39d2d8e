//! Core domain: startup systems.

use bevy::prelude::*;

/// Screen pixels per world unit. Physics and level data are in world units.
pub const PIXELS_PER_UNIT: f32 = 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::from(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}
