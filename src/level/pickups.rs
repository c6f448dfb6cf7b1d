//! Level domain: pickups that change player abilities on contact.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::{DoubleJumpChanged, Player};

/// Grants the double jump when touched, then disappears.
#[derive(Component, Debug)]
pub struct DoubleJumpPickup;

pub(crate) fn collect_pickups(
    mut commands: Commands,
    mut collision_start_events: MessageReader<CollisionStart>,
    mut ability_events: MessageWriter<DoubleJumpChanged>,
    pickup_query: Query<(), With<DoubleJumpPickup>>,
    player_query: Query<(), With<Player>>,
) {
    for event in collision_start_events.read() {
        let (pickup, player) = if pickup_query.contains(event.collider1) {
            (event.collider1, event.collider2)
        } else if pickup_query.contains(event.collider2) {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if !player_query.contains(player) {
            continue;
        }

        info!("Double jump pickup {:?} collected", pickup);
        ability_events.write(DoubleJumpChanged {
            player,
            enabled: true,
        });
        commands.entity(pickup).despawn();
    }
}
