//! Movement domain: messages sent to and from the player controller.

use bevy::ecs::message::Message;
use bevy::prelude::*;

use crate::movement::MovementEvent;

/// Grants or revokes ladder access. Applied at the start of the next controller tick.
#[derive(Debug, Clone, Copy)]
pub struct ClimbPermissionChanged {
    pub player: Entity,
    pub can_climb: bool,
}

impl Message for ClimbPermissionChanged {}

/// Grants or revokes the double jump.
#[derive(Debug, Clone, Copy)]
pub struct DoubleJumpChanged {
    pub player: Entity,
    pub enabled: bool,
}

impl Message for DoubleJumpChanged {}

/// A locomotion transition produced by the controller.
#[derive(Debug, Clone, Copy)]
pub struct PlayerMovementEvent {
    pub player: Entity,
    pub event: MovementEvent,
}

impl Message for PlayerMovementEvent {}
