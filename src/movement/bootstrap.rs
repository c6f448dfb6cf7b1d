//! Movement domain: player spawning from controller configuration.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::animation::{AnimationController, AnimatorParameters};
use crate::movement::systems::SurfaceContacts;
use crate::movement::{
    ControllerConfig, GameLayer, Player, PlayerController, SurfaceProbes, shape_collider,
};

/// Spawns the player body at `position` and returns its entity.
pub fn spawn_player(commands: &mut Commands, config: &ControllerConfig, position: Vec2) -> Entity {
    info!(
        "Spawning player at ({}, {}): move={}, run={}, jump={}, double_jump={}",
        position.x,
        position.y,
        config.move_speed,
        config.run_speed,
        config.jump_force,
        config.double_jump_unlocked
    );

    commands
        .spawn((
            // Identity & locomotion
            (
                Player,
                PlayerController::new(config),
                SurfaceProbes::from_config(config),
                SurfaceContacts::default(),
            ),
            // Presentation
            (
                AnimatorParameters::default(),
                AnimationController::default(),
                Sprite {
                    color: Color::srgb(0.9, 0.9, 0.9),
                    custom_size: Some(config.standing_shape.size),
                    ..default()
                },
                Transform::from_translation(position.extend(1.0)),
            ),
            // Physics
            (
                RigidBody::Dynamic,
                shape_collider(config.standing_shape),
                LockedAxes::ROTATION_LOCKED,
                LinearVelocity::default(),
                GravityScale(config.gravity_scale),
                Mass(config.mass),
                Friction::new(0.0),
                CollisionEventsEnabled,
                CollisionLayers::new(GameLayer::Player, [GameLayer::Ground, GameLayer::Sensor]),
            ),
        ))
        .id()
}
