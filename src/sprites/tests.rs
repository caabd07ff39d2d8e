//! Sprites module: tests for clip selection, playback and manifest parsing.

use avian2d::prelude::LinearVelocity;
use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::manifest::parse_manifest;
use super::*;
use crate::movement::controller::{
    AnimationSelection, AnimationSink, AnimationState, ControllerConfig, JumpGroundController,
};
use crate::movement::{Player, PlayerController};

fn looping(frames: u32, frame_duration: f32) -> AnimationController {
    AnimationController {
        total_frames: frames,
        frame_duration,
        clip_dirty: false,
        ..Default::default()
    }
}

#[test]
fn test_clip_names_match_states() {
    assert_eq!(clip_name(AnimationState::Idle), "z_idle");
    assert_eq!(clip_name(AnimationState::Walk), "z_walk");
    assert_eq!(clip_name(AnimationState::RisingInAir), "z_inair_up");
    assert_eq!(clip_name(AnimationState::FallingInAir), "z_inair_down");
    assert_eq!(clip_name(AnimationState::LevelInAir), "z_inair_level");
}

#[test]
fn test_state_change_restarts_clip() {
    let mut anim = looping(4, 0.1);
    anim.current_frame = 2;
    anim.frame_timer = 0.05;

    anim.set_state(AnimationState::FallingInAir);

    assert_eq!(anim.previous_state, AnimationState::Idle);
    assert_eq!(anim.current_frame, 0);
    assert_eq!(anim.frame_timer, 0.0);
    assert!(anim.clip_dirty);
}

#[test]
fn test_state_change_message_reports_previous_state() {
    let mut world = World::new();
    world.init_resource::<Messages<AnimationStateChanged>>();
    let player = world
        .spawn((
            Player,
            PlayerController(JumpGroundController::new(ControllerConfig::default()).unwrap()),
            LinearVelocity(Vec2::new(0.0, -5.0)),
            AnimationController::default(),
        ))
        .id();

    world.run_system_once(select_player_animation).unwrap();
    let changes = world
        .run_system_once(|mut reader: MessageReader<AnimationStateChanged>| {
            reader
                .read()
                .map(|change| (change.entity, change.from, change.to))
                .collect::<Vec<_>>()
        })
        .unwrap();

    assert_eq!(
        changes,
        vec![(player, AnimationState::Idle, AnimationState::FallingInAir)]
    );
    let animation = world.get::<AnimationController>(player).unwrap();
    assert_eq!(animation.previous_state, AnimationState::Idle);
    assert_eq!(animation.state, AnimationState::FallingInAir);
}

#[test]
fn test_same_state_keeps_progress() {
    let mut anim = looping(4, 0.1);
    anim.current_frame = 2;

    anim.set_state(AnimationState::Idle);

    assert_eq!(anim.current_frame, 2);
    assert!(!anim.clip_dirty);
}

#[test]
fn test_walk_playback_scales_with_speed_fraction() {
    let mut anim = looping(4, 0.1);
    anim.play(AnimationSelection {
        state: AnimationState::Walk,
        walk_speed_fraction: 0.5,
    });
    anim.clip_dirty = false;
    anim.total_frames = 4;

    // Half speed: 0.15s of real time only covers 0.075s of clip time.
    assert!(!anim.advance(0.15));
    assert!(anim.advance(0.1));
    assert_eq!(anim.current_frame, 1);
}

#[test]
fn test_non_walk_states_play_at_full_speed() {
    let mut anim = looping(4, 0.1);
    anim.play(AnimationSelection {
        state: AnimationState::Walk,
        walk_speed_fraction: 0.25,
    });
    anim.play(AnimationSelection {
        state: AnimationState::RisingInAir,
        walk_speed_fraction: 0.0,
    });

    assert_eq!(anim.playback_speed, 1.0);
}

#[test]
fn test_frames_wrap_around() {
    let mut anim = looping(3, 0.1);

    anim.advance(0.35);

    assert_eq!(anim.current_frame, 0);
}

#[test]
fn test_single_frame_clip_never_advances() {
    let mut anim = looping(1, 0.1);
    assert!(!anim.advance(1.0));
    assert_eq!(anim.current_frame, 0);
}

#[test]
fn test_parse_manifest_applies_default_duration() {
    let json = r#"{
        "version": 2,
        "clips": {
            "z_idle": { "path": "idle.png", "frames": 4, "size": 32, "frame_duration": 0.2 },
            "z_inair_up": { "path": "up.png", "frames": 2, "size": 32 }
        }
    }"#;

    let manifest = parse_manifest(json).unwrap();

    assert_eq!(manifest.version, 2);
    assert_eq!(manifest.clips["z_idle"].frame_duration, 0.2);
    assert_eq!(manifest.clips["z_inair_up"].frame_duration, 0.1);
}

#[test]
fn test_shipped_manifest_covers_every_state() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/sprites/zangoose.json");
    let contents = std::fs::read_to_string(path).unwrap();
    let manifest = parse_manifest(&contents).unwrap();

    for state in [
        AnimationState::Idle,
        AnimationState::Walk,
        AnimationState::RisingInAir,
        AnimationState::FallingInAir,
        AnimationState::LevelInAir,
    ] {
        assert!(manifest.clips.contains_key(clip_name(state)), "{:?}", state);
    }
}
