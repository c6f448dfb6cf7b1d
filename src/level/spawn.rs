//! Level domain: spawning platforms, ladders, pickups and the player.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::content::{LevelDef, PickupKind};
use crate::core::GameState;
use crate::ladder::spawn_ladder;
use crate::level::pickups::DoubleJumpPickup;
use crate::movement::{ControllerConfig, GameLayer, Ground, spawn_player};

pub(crate) fn spawn_level(
    mut commands: Commands,
    level: Res<LevelDef>,
    config: Res<ControllerConfig>,
    gravity: Res<Gravity>,
) {
    let platform_color = Color::srgb(0.4, 0.5, 0.4);
    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    for platform in &level.platforms {
        let rect = platform.rect;
        commands.spawn((
            Ground,
            Name::new(platform.id.clone()),
            Sprite {
                color: platform_color,
                custom_size: Some(rect.size),
                ..default()
            },
            Transform::from_translation(rect.center.extend(0.0)),
            RigidBody::Static,
            Collider::rectangle(rect.size.x, rect.size.y),
            ground_layers,
            DespawnOnExit(GameState::Playing),
        ));
    }

    for ladder in &level.ladders {
        let entity = spawn_ladder(&mut commands, ladder.rect.center, ladder.rect.size);
        commands.entity(entity).insert((
            Name::new(ladder.id.clone()),
            DespawnOnExit(GameState::Playing),
        ));
    }

    for pickup in &level.pickups {
        let color = match pickup.kind {
            PickupKind::DoubleJump => Color::srgb(0.95, 0.85, 0.3),
        };
        commands.spawn((
            DoubleJumpPickup,
            Name::new(pickup.id.clone()),
            Sprite {
                color,
                custom_size: Some(Vec2::splat(pickup.radius * 2.0)),
                ..default()
            },
            Transform::from_translation(pickup.position.extend(0.5)),
            RigidBody::Static,
            Collider::circle(pickup.radius),
            Sensor,
            CollisionEventsEnabled,
            CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
            DespawnOnExit(GameState::Playing),
        ));
    }

    let player = spawn_player(&mut commands, &config, level.player_spawn);
    commands
        .entity(player)
        .insert(DespawnOnExit(GameState::Playing));

    info!(
        "Spawned level '{}': single jump peaks at {:.0} px",
        level.name,
        config.single_jump_height(-gravity.0.y)
    );
}
