//! Movement domain: jump and ground-state controller.
//!
//! The controller turns raw per-tick signals (input axis, jump button, body
//! velocity, ground probes) into jump behaviour, a grounded flag and an
//! animation selection. It never touches the physics world directly: ground
//! probing, integration and animation playback go through the capability
//! traits below so the same state machine runs inside the ECS or in tests.

use bevy::log::debug;
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Number of downward probes cast across the foot span.
pub const GROUND_CHECK_RAYS: usize = 3;

/// Probe length used while the body has no vertical velocity.
pub const STANDING_PROBE_DISTANCE: f32 = 0.02;

// ============================================================================
// Configuration
// ============================================================================

/// Tuning for a single controller. Frame counts are converted to seconds
/// with `tick_rate`.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ControllerConfig {
    pub walk_force: f32,
    pub jump_speed: f32,
    pub walk_max_speed: f32,
    pub in_air_jump_force: f32,
    pub jump_leeway_frames: u32,
    pub max_hold_frames: u32,
    /// Vertical speed separating the rising/falling poses from the level pose.
    pub jump_transition_threshold: f32,
    pub tick_rate: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk_force: 40.0,
            jump_speed: 8.0,
            walk_max_speed: 6.0,
            in_air_jump_force: 18.0,
            jump_leeway_frames: 6,
            max_hold_frames: 12,
            jump_transition_threshold: 2.0,
            tick_rate: 60.0,
        }
    }
}

impl ControllerConfig {
    /// Window after a press during which landing still triggers the jump.
    pub fn jump_leeway(&self) -> f32 {
        self.jump_leeway_frames as f32 / self.tick_rate
    }

    /// Longest time the hold boost can keep pushing a rising jump.
    pub fn max_hold_time(&self) -> f32 {
        self.max_hold_frames as f32 / self.tick_rate
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("walk_force", self.walk_force),
            ("jump_speed", self.jump_speed),
            ("walk_max_speed", self.walk_max_speed),
            ("in_air_jump_force", self.in_air_jump_force),
            ("jump_transition_threshold", self.jump_transition_threshold),
            ("tick_rate", self.tick_rate),
        ];
        for (field, value) in fields {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
            if value < 0.0 {
                return Err(ConfigError::NegativeValue { field, value });
            }
        }

        if self.tick_rate <= 0.0 {
            return Err(ConfigError::NonPositiveTickRate(self.tick_rate));
        }
        if self.walk_max_speed <= 0.0 {
            return Err(ConfigError::NonPositiveWalkMaxSpeed(self.walk_max_speed));
        }

        Ok(())
    }
}

/// Rejected controller configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    NonPositiveTickRate(f32),
    NonPositiveWalkMaxSpeed(f32),
    NegativeValue { field: &'static str, value: f32 },
    NonFinite { field: &'static str },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::NonPositiveTickRate(rate) => {
                write!(f, "tick_rate must be positive, got {}", rate)
            }
            ConfigError::NonPositiveWalkMaxSpeed(speed) => {
                write!(f, "walk_max_speed must be positive, got {}", speed)
            }
            ConfigError::NegativeValue { field, value } => {
                write!(f, "{} must not be negative, got {}", field, value)
            }
            ConfigError::NonFinite { field } => write!(f, "{} must be a finite number", field),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// State, inputs and outputs
// ============================================================================

/// Mutable controller state carried between ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct ControllerState {
    pub facing_right: bool,
    pub grounded: bool,
    pub last_jump_input_held: bool,
    /// Simulation time of the last jump press, 0 when there is none.
    pub last_jump_press_time: f32,
    /// Simulation time the current jump started, 0 when not jump-holding.
    pub jump_start_time: f32,
}

impl Default for ControllerState {
    fn default() -> Self {
        Self {
            facing_right: true,
            grounded: false,
            last_jump_input_held: false,
            last_jump_press_time: 0.0,
            jump_start_time: 0.0,
        }
    }
}

/// Bottom edge of the foot collider, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FootSpan {
    pub start: Vec2,
    pub end: Vec2,
}

impl FootSpan {
    /// Span along the bottom of an axis-aligned box.
    pub fn from_bounds(min: Vec2, max: Vec2) -> Self {
        Self {
            start: Vec2::new(min.x, min.y),
            end: Vec2::new(max.x, min.y),
        }
    }

    /// Evenly spaced probe origins with both endpoints included.
    pub fn probe_origins(&self, count: usize) -> impl Iterator<Item = Vec2> + '_ {
        let steps = count.saturating_sub(1).max(1) as f32;
        (0..count).map(move |i| self.start.lerp(self.end, i as f32 / steps))
    }
}

/// Everything the controller reads for one fixed tick.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickInput {
    pub horizontal_axis: f32,
    pub jump_button_held: bool,
    pub current_vertical_velocity: f32,
    pub current_horizontal_velocity: f32,
    pub current_time: f32,
    pub fixed_delta_time: f32,
    pub foot_span: FootSpan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    RisingInAir,
    FallingInAir,
    LevelInAir,
}

/// Animation choice plus the walk playback fraction in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationSelection {
    pub state: AnimationState,
    pub walk_speed_fraction: f32,
}

/// Result of one fixed tick, consumed by the integrator and visuals.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TickOutput {
    pub horizontal_force: f32,
    pub vertical_velocity_override: Option<f32>,
    pub additional_upward_force: Option<f32>,
    pub grounded: bool,
    pub facing_right: bool,
    /// Set on the tick the facing direction changed.
    pub flipped: bool,
    pub animation: AnimationSelection,
}

// ============================================================================
// Collaborators
// ============================================================================

/// Short-range ray query against terrain.
pub trait GroundProbe {
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool;
}

impl<F> GroundProbe for F
where
    F: Fn(Vec2, Dir2, f32) -> bool,
{
    fn probe(&self, origin: Vec2, direction: Dir2, max_distance: f32) -> bool {
        self(origin, direction, max_distance)
    }
}

/// Applies a tick's forces and velocity overrides to a body.
pub trait PhysicsIntegrator {
    fn integrate(&mut self, output: &TickOutput, walk_max_speed: f32, dt: f32);
}

/// Receives the animation chosen on each render tick.
pub trait AnimationSink {
    fn play(&mut self, selection: AnimationSelection);
}

/// Clamp a horizontal speed to `max_speed`, keeping its sign.
pub fn cap_horizontal_speed(velocity_x: f32, max_speed: f32) -> f32 {
    if velocity_x.abs() > max_speed {
        velocity_x.signum() * max_speed
    } else {
        velocity_x
    }
}

/// Velocity-level integrator for a body with a known inverse mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BodyIntegrator {
    pub velocity: Vec2,
    pub inverse_mass: f32,
}

impl PhysicsIntegrator for BodyIntegrator {
    fn integrate(&mut self, output: &TickOutput, walk_max_speed: f32, dt: f32) {
        self.velocity.x += output.horizontal_force * self.inverse_mass * dt;

        // Direct assignment keeps jump height independent of the incoming speed.
        if let Some(vy) = output.vertical_velocity_override {
            self.velocity.y = vy;
        }
        if let Some(force) = output.additional_upward_force {
            self.velocity.y += force * self.inverse_mass * dt;
        }

        self.velocity.x = cap_horizontal_speed(self.velocity.x, walk_max_speed);
    }
}

// ============================================================================
// Controller
// ============================================================================

#[derive(Debug, Clone)]
pub struct JumpGroundController {
    config: ControllerConfig,
    state: ControllerState,
    jump_leeway: f32,
    max_hold_time: f32,
}

impl JumpGroundController {
    pub fn new(config: ControllerConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let jump_leeway = config.jump_leeway();
        let max_hold_time = config.max_hold_time();
        Ok(Self {
            config,
            state: ControllerState::default(),
            jump_leeway,
            max_hold_time,
        })
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn state(&self) -> &ControllerState {
        &self.state
    }

    pub fn jump_leeway(&self) -> f32 {
        self.jump_leeway
    }

    pub fn max_hold_time(&self) -> f32 {
        self.max_hold_time
    }

    /// Run one fixed simulation tick.
    pub fn advance_fixed_tick<P>(&mut self, input: &TickInput, probe: &P) -> TickOutput
    where
        P: GroundProbe + ?Sized,
    {
        let horizontal_force = input.horizontal_axis * self.config.walk_force;

        let flipped = (self.state.facing_right && input.horizontal_axis < 0.0)
            || (!self.state.facing_right && input.horizontal_axis > 0.0);
        if flipped {
            self.state.facing_right = !self.state.facing_right;
        }

        self.record_jump_input(input.jump_button_held, input.current_time);

        let mut vertical_velocity_override = None;
        let mut additional_upward_force = None;

        if self.state.grounded
            && input.current_time - self.state.last_jump_press_time < self.jump_leeway
        {
            vertical_velocity_override = Some(self.config.jump_speed);
            self.state.jump_start_time = input.current_time;
            debug!(
                "Jump: t={:.3}, pressed_at={:.3}",
                input.current_time, self.state.last_jump_press_time
            );
        } else if !self.state.grounded
            && self.state.last_jump_press_time != 0.0
            && input.current_vertical_velocity > 0.0
            && input.current_time - self.state.jump_start_time < self.max_hold_time
        {
            additional_upward_force = Some(self.config.in_air_jump_force);
        }

        // Must run after the jump decision: it looks at where the body will be
        // next tick, so a freshly triggered jump already reads as airborne.
        let anticipated_vy = vertical_velocity_override.unwrap_or(input.current_vertical_velocity);
        let was_grounded = self.state.grounded;
        self.update_grounded(
            anticipated_vy,
            input.fixed_delta_time,
            &input.foot_span,
            probe,
        );
        if self.state.grounded && !was_grounded {
            debug!("Landed: t={:.3}", input.current_time);
        }

        let velocity = Vec2::new(input.current_horizontal_velocity, anticipated_vy);

        TickOutput {
            horizontal_force,
            vertical_velocity_override,
            additional_upward_force,
            grounded: self.state.grounded,
            facing_right: self.state.facing_right,
            flipped,
            animation: self.advance_render_tick(velocity),
        }
    }

    /// Pick the animation for the body's current velocity.
    pub fn advance_render_tick(&self, velocity: Vec2) -> AnimationSelection {
        if self.state.grounded {
            let walk_speed_fraction = if self.config.walk_max_speed > 0.0 {
                (velocity.x.abs() / self.config.walk_max_speed).clamp(0.0, 1.0)
            } else {
                0.0
            };
            let state = if velocity.x == 0.0 {
                AnimationState::Idle
            } else {
                AnimationState::Walk
            };
            AnimationSelection {
                state,
                walk_speed_fraction,
            }
        } else {
            let threshold = self.config.jump_transition_threshold;
            let state = if velocity.y > threshold {
                AnimationState::RisingInAir
            } else if velocity.y < -threshold {
                AnimationState::FallingInAir
            } else {
                AnimationState::LevelInAir
            };
            AnimationSelection {
                state,
                walk_speed_fraction: 0.0,
            }
        }
    }

    /// Track the jump button. A release clears any buffered press at once.
    fn record_jump_input(&mut self, held: bool, now: f32) {
        if held && !self.state.last_jump_input_held {
            self.state.last_jump_press_time = now;
        } else if !held {
            self.state.last_jump_press_time = 0.0;
        }
        self.state.last_jump_input_held = held;
    }

    /// Probe for ground below the feet and update `grounded`.
    fn update_grounded<P>(
        &mut self,
        vertical_velocity: f32,
        dt: f32,
        foot_span: &FootSpan,
        probe: &P,
    ) -> bool
    where
        P: GroundProbe + ?Sized,
    {
        self.state.grounded = false;
        if vertical_velocity > 0.0 {
            return false;
        }

        // Look as far as the body will fall this tick, not where it is now.
        let distance = if vertical_velocity == 0.0 {
            STANDING_PROBE_DISTANCE
        } else {
            vertical_velocity.abs() * dt
        };

        for origin in foot_span.probe_origins(GROUND_CHECK_RAYS) {
            if probe.probe(origin, Dir2::NEG_Y, distance) {
                self.state.grounded = true;
                self.state.jump_start_time = 0.0;
                break;
            }
        }

        self.state.grounded
    }
}
