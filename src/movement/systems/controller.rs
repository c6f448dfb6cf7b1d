//! Movement domain: systems that drive the player controller each frame and fixed step.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::movement::systems::sensors::SurfaceContacts;
use crate::movement::{
    AvianBody, ClimbPermissionChanged, ControllerConfig, DoubleJumpChanged, Facing, FixedContext,
    FrameContext, FrameInput, MovementEvent, Player, PlayerController, PlayerMovementEvent,
};

type BodyComponents<'a> = (
    &'a mut LinearVelocity,
    &'a mut GravityScale,
    &'a mut Collider,
    &'a Mass,
);

/// Applies permission messages queued since the previous tick.
pub(crate) fn apply_permission_changes(
    mut climb_messages: MessageReader<ClimbPermissionChanged>,
    mut double_jump_messages: MessageReader<DoubleJumpChanged>,
    mut movement_events: MessageWriter<PlayerMovementEvent>,
    mut query: Query<(&mut PlayerController, BodyComponents), With<Player>>,
) {
    for message in climb_messages.read() {
        let Ok((mut controller, (velocity, gravity_scale, collider, mass))) =
            query.get_mut(message.player)
        else {
            continue;
        };
        let mut body = AvianBody::new(velocity, gravity_scale, collider, mass);
        debug!("Climb permission: {}", message.can_climb);
        if let Some(event) = controller.set_can_climb(message.can_climb, &mut body) {
            movement_events.write(PlayerMovementEvent {
                player: message.player,
                event,
            });
        }
    }

    for message in double_jump_messages.read() {
        let Ok((mut controller, _)) = query.get_mut(message.player) else {
            continue;
        };
        if message.enabled {
            controller.enable_double_jump();
        } else {
            controller.disable_double_jump();
        }
        info!("Double jump enabled: {}", message.enabled);
    }
}

pub(crate) fn update_controllers(
    time: Res<Time>,
    input: Res<FrameInput>,
    config: Res<ControllerConfig>,
    mut movement_events: MessageWriter<PlayerMovementEvent>,
    mut query: Query<
        (Entity, &mut PlayerController, &SurfaceContacts, BodyComponents),
        With<Player>,
    >,
) {
    for (entity, mut controller, contacts, (velocity, gravity_scale, collider, mass)) in &mut query
    {
        let ctx = FrameContext {
            dt: time.delta_secs(),
            input: *input,
            sensors: contacts.0,
        };
        let mut body = AvianBody::new(velocity, gravity_scale, collider, mass);

        for event in controller.update(&ctx, &config, &mut body) {
            movement_events.write(PlayerMovementEvent {
                player: entity,
                event,
            });
        }
    }
}

pub(crate) fn fixed_update_controllers(
    time: Res<Time>,
    gravity: Res<Gravity>,
    config: Res<ControllerConfig>,
    mut movement_events: MessageWriter<PlayerMovementEvent>,
    mut query: Query<(Entity, &mut PlayerController, BodyComponents), With<Player>>,
) {
    let ctx = FixedContext {
        dt: time.delta_secs(),
        gravity: gravity.0,
    };

    for (entity, mut controller, (velocity, gravity_scale, collider, mass)) in &mut query {
        let mut body = AvianBody::new(velocity, gravity_scale, collider, mass);
        if let Some(event) = controller.fixed_update(&ctx, &config, &mut body) {
            movement_events.write(PlayerMovementEvent {
                player: entity,
                event,
            });
        }
    }
}

/// Mirrors facing onto the sprite.
pub(crate) fn sync_facing(mut query: Query<(&PlayerController, &mut Sprite), With<Player>>) {
    for (controller, mut sprite) in &mut query {
        let flip = controller.facing() == Facing::Left;
        if sprite.flip_x != flip {
            sprite.flip_x = flip;
        }
    }
}

/// Logs every locomotion transition sent this frame, from either phase.
pub(crate) fn log_movement_events(
    mut movement_events: MessageReader<PlayerMovementEvent>,
    query: Query<&PlayerController>,
) {
    for message in movement_events.read() {
        let Ok(controller) = query.get(message.player) else {
            continue;
        };
        log_event(controller, message.event);
    }
}

fn log_event(controller: &PlayerController, event: MovementEvent) {
    match event {
        MovementEvent::Landed | MovementEvent::LeftGround => debug!(
            "{:?}: grounded={}, jump_count={}",
            event,
            controller.is_grounded(),
            controller.jump_count()
        ),
        MovementEvent::Jumped(kind) => debug!(
            "Jump {:?}: jump_count={}, vy={}",
            kind,
            controller.jump_count(),
            controller.vertical_velocity()
        ),
        _ => debug!("{:?}", event),
    }
}
