//! Movement domain: tests for reading the foot span off a spawned body.

use avian2d::prelude::*;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::controller::FootSpan;
use super::systems::movement::body_foot_span;
use super::FootCollider;

const FOOT_OFFSET: f32 = -0.45;

fn spawn_body(world: &mut World, position: Vec2) -> Entity {
    let body = world.spawn((Position(position), GlobalTransform::IDENTITY)).id();
    world.spawn((
        FootCollider {
            half_extents: Vec2::new(0.3, 0.05),
        },
        Transform::from_xyz(0.0, FOOT_OFFSET, 0.0),
        // Never propagated in these tests, so it stays at the origin.
        GlobalTransform::IDENTITY,
        ChildOf(body),
    ));
    body
}

fn foot_span_of(world: &mut World, body: Entity) -> Option<FootSpan> {
    world
        .run_system_once(
            move |bodies: Query<(&Position, &Children)>,
                  feet: Query<(&FootCollider, &Transform)>| {
                let (position, children) = bodies.get(body).ok()?;
                body_foot_span(position, children, &feet)
            },
        )
        .unwrap()
}

fn assert_near(actual: Vec2, expected: Vec2) {
    assert!(
        (actual - expected).length() < 1e-5,
        "expected {:?}, got {:?}",
        expected,
        actual
    );
}

#[test]
fn test_foot_span_sits_under_body_position() {
    let mut world = World::new();
    let body = spawn_body(&mut world, Vec2::new(3.0, 2.0));

    let span = foot_span_of(&mut world, body).unwrap();

    assert_near(span.start, Vec2::new(2.7, 1.5));
    assert_near(span.end, Vec2::new(3.3, 1.5));
}

#[test]
fn test_foot_span_tracks_position_between_transform_updates() {
    let mut world = World::new();
    let body = spawn_body(&mut world, Vec2::new(3.0, 2.0));
    foot_span_of(&mut world, body).unwrap();

    // A second fixed tick in the same frame: physics moved the body, but
    // transforms have not been propagated since.
    world.get_mut::<Position>(body).unwrap().0 = Vec2::new(3.0, 1.0);
    let span = foot_span_of(&mut world, body).unwrap();

    assert_eq!(
        world.get::<GlobalTransform>(body).unwrap().translation(),
        Vec3::ZERO
    );
    assert_near(span.start, Vec2::new(2.7, 0.5));
    assert_near(span.end, Vec2::new(3.3, 0.5));
}

#[test]
fn test_body_without_foot_has_no_span() {
    let mut world = World::new();
    let body = world.spawn(Position(Vec2::new(0.0, 0.0))).id();
    let other = world.spawn(Transform::default()).id();
    world.entity_mut(other).insert(ChildOf(body));

    assert_eq!(foot_span_of(&mut world, body), None);
}
