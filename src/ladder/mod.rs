//! Ladder domain: trigger zones that grant the player climb permission.
//!
//! Entering a ladder sensor sends `ClimbPermissionChanged { can_climb: true }`,
//! leaving it sends `false`. Overlaps are not counted: leaving one of two
//! overlapping ladders revokes permission even while the other still
//! overlaps the player.


use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{ClimbPermissionChanged, GameLayer, MovementSet, Player};

/// Marker for ladder trigger zones.
#[derive(Component, Debug)]
pub struct Ladder;

pub struct LadderPlugin;

impl Plugin for LadderPlugin {
    fn build(&self, app: &mut App) {
        // Runs after the controller so permission changes land on the next tick.
        app.add_systems(
            Update,
            track_ladder_zones
                .after(MovementSet::Controller)
                .run_if(in_state(GameState::Playing)),
        );
    }
}

/// Spawns a ladder sensor covering `size` centered at `center`.
pub fn spawn_ladder(commands: &mut Commands, center: Vec2, size: Vec2) -> Entity {
    commands
        .spawn((
            Ladder,
            Sprite {
                color: Color::srgba(0.6, 0.45, 0.25, 0.6),
                custom_size: Some(size),
                ..default()
            },
            Transform::from_translation(center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(size.x, size.y),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
        ))
        .id()
}

/// Orders a colliding pair as `(ladder, player)` if it is one.
pub(crate) fn ladder_player_pair(
    collider1: Entity,
    collider2: Entity,
    is_ladder: impl Fn(Entity) -> bool,
    is_player: impl Fn(Entity) -> bool,
) -> Option<(Entity, Entity)> {
    if is_ladder(collider1) && is_player(collider2) {
        Some((collider1, collider2))
    } else if is_ladder(collider2) && is_player(collider1) {
        Some((collider2, collider1))
    } else {
        None
    }
}

pub(crate) fn track_ladder_zones(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    mut permission_events: MessageWriter<ClimbPermissionChanged>,
    ladder_query: Query<(), With<Ladder>>,
    player_query: Query<(), With<Player>>,
) {
    let is_ladder = |entity: Entity| ladder_query.contains(entity);
    let is_player = |entity: Entity| player_query.contains(entity);

    for event in collision_start_events.read() {
        let Some((ladder, player)) =
            ladder_player_pair(event.collider1, event.collider2, is_ladder, is_player)
        else {
            continue;
        };
        debug!("Player {:?} entered ladder {:?}", player, ladder);
        permission_events.write(ClimbPermissionChanged {
            player,
            can_climb: true,
        });
    }

    for event in collision_end_events.read() {
        let Some((ladder, player)) =
            ladder_player_pair(event.collider1, event.collider2, is_ladder, is_player)
        else {
            continue;
        };
        debug!("Player {:?} left ladder {:?}", player, ladder);
        permission_events.write(ClimbPermissionChanged {
            player,
            can_climb: false,
        });
    }
}
