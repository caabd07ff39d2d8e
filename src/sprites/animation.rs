//! Animation state playback.
//!
//! The movement controller picks an [`AnimationState`] each render frame;
//! this module maps it onto a clip from the sprite manifest and advances
//! frames, scaling walk playback by the walk speed fraction.

use avian2d::prelude::*;
use bevy::ecs::message::Message;
use bevy::prelude::*;

use super::SpriteManifest;
use crate::movement::controller::{AnimationSelection, AnimationSink, AnimationState};
use crate::movement::{Player, PlayerController};

/// Clip played for each animation state.
pub fn clip_name(state: AnimationState) -> &'static str {
    match state {
        AnimationState::Idle => "z_idle",
        AnimationState::Walk => "z_walk",
        AnimationState::RisingInAir => "z_inair_up",
        AnimationState::FallingInAir => "z_inair_down",
        AnimationState::LevelInAir => "z_inair_level",
    }
}

/// Tint used when a clip has no strip image.
pub fn placeholder_color(state: AnimationState) -> Color {
    match state {
        AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
        AnimationState::Walk => Color::srgb(0.75, 0.95, 0.75),
        AnimationState::RisingInAir => Color::srgb(0.7, 0.8, 1.0),
        AnimationState::FallingInAir => Color::srgb(1.0, 0.7, 0.7),
        AnimationState::LevelInAir => Color::srgb(1.0, 0.95, 0.7),
    }
}

/// Component for animation playback on a sprite.
#[derive(Component, Debug)]
pub struct AnimationController {
    /// Current animation state.
    pub state: AnimationState,
    /// State before the last transition, reported in `AnimationStateChanged`.
    pub previous_state: AnimationState,
    /// Current frame index (0-based).
    pub current_frame: u32,
    /// Total frames in current clip.
    pub total_frames: u32,
    /// Time accumulator for frame timing.
    pub frame_timer: f32,
    /// Seconds per frame at normal speed.
    pub frame_duration: f32,
    /// Playback rate multiplier.
    pub playback_speed: f32,
    /// The sprite still shows the previous clip.
    pub clip_dirty: bool,
}

impl Default for AnimationController {
    fn default() -> Self {
        Self {
            state: AnimationState::Idle,
            previous_state: AnimationState::Idle,
            current_frame: 0,
            total_frames: 1,
            frame_timer: 0.0,
            frame_duration: 0.1,
            playback_speed: 1.0,
            clip_dirty: true,
        }
    }
}

impl AnimationController {
    /// Set the animation state, restarting the clip if the state changed.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.previous_state = self.state;
            self.state = state;
            self.current_frame = 0;
            self.frame_timer = 0.0;
            self.clip_dirty = true;
        }
    }

    /// Advance the frame timer. Returns true when the frame index changed.
    /// All clips loop.
    pub fn advance(&mut self, dt: f32) -> bool {
        if self.frame_duration <= 0.0 || self.total_frames <= 1 {
            return false;
        }

        self.frame_timer += dt * self.playback_speed;
        let mut changed = false;
        while self.frame_timer >= self.frame_duration {
            self.frame_timer -= self.frame_duration;
            self.current_frame = (self.current_frame + 1) % self.total_frames;
            changed = true;
        }
        changed
    }
}

impl AnimationSink for AnimationController {
    fn play(&mut self, selection: AnimationSelection) {
        self.set_state(selection.state);
        self.playback_speed = match selection.state {
            AnimationState::Walk => selection.walk_speed_fraction,
            _ => 1.0,
        };
    }
}

/// Message fired when animation state changes.
#[derive(Debug)]
pub struct AnimationStateChanged {
    pub entity: Entity,
    pub from: AnimationState,
    pub to: AnimationState,
}

impl Message for AnimationStateChanged {}

/// Render-tick half of the player controller: choose the animation from the
/// body's velocity and hand it to the sprite's playback.
pub fn select_player_animation(
    mut query: Query<
        (
            Entity,
            &PlayerController,
            &LinearVelocity,
            &mut AnimationController,
        ),
        With<Player>,
    >,
    mut changed_events: MessageWriter<AnimationStateChanged>,
) {
    for (entity, controller, velocity, mut animation) in &mut query {
        let selection = controller.advance_render_tick(velocity.0);
        let changed = selection.state != animation.state;
        animation.play(selection);

        if changed {
            changed_events.write(AnimationStateChanged {
                entity,
                from: animation.previous_state,
                to: animation.state,
            });
        }
    }
}

/// System that swaps clips and advances frames based on time.
pub fn update_animation_frames(
    time: Res<Time>,
    manifest: Res<SpriteManifest>,
    mut query: Query<(&mut AnimationController, &mut Sprite)>,
) {
    for (mut controller, mut sprite) in &mut query {
        if controller.clip_dirty {
            let name = clip_name(controller.state);
            if let Some(clip) = manifest.get(name) {
                controller.total_frames = clip.frames.max(1);
                controller.frame_duration = clip.frame_duration;
            } else {
                controller.total_frames = 1;
            }

            match manifest.get_texture(name) {
                Some((image, layout)) => {
                    sprite.image = image;
                    sprite.texture_atlas = Some(TextureAtlas { layout, index: 0 });
                    sprite.color = Color::WHITE;
                }
                None => {
                    sprite.texture_atlas = None;
                    sprite.color = placeholder_color(controller.state);
                }
            }
            controller.clip_dirty = false;
        }

        if controller.advance(time.delta_secs()) {
            if let Some(atlas) = sprite.texture_atlas.as_mut() {
                atlas.index = controller.current_frame as usize;
            }
        }
    }
}

#[cfg(feature = "dev-tools")]
pub fn log_animation_changes(mut events: MessageReader<AnimationStateChanged>) {
    for event in events.read() {
        debug!(
            "Animation {:?}: {:?} -> {:?}",
            event.entity, event.from, event.to
        );
    }
}
