//! Movement domain: player controller plugin wiring and public exports.

mod body;
mod bootstrap;
mod components;
mod controller;
mod events;
mod resources;
mod systems;


pub use body::{AvianBody, shape_collider};
pub use bootstrap::spawn_player;
pub use components::{Facing, GameLayer, Ground, Player, SurfaceProbes};
pub use controller::{
    AXIS_DEADZONE, CharacterBody, FixedContext, FrameContext, JumpKind, MovementEvent,
    PlayerController, SensorReadings,
};
pub use events::{ClimbPermissionChanged, DoubleJumpChanged, PlayerMovementEvent};
pub use resources::{BodyShape, ControllerConfig, FrameInput, HorizontalResponse, ProbeDef};
pub use systems::SurfaceContacts;

use bevy::prelude::*;

use crate::core::{GameState, gameplay_active};
use crate::movement::systems::{
    apply_permission_changes, detect_surfaces, fixed_update_controllers, log_movement_events,
    read_input, sync_facing, update_controllers,
};

/// Ordering for the per-frame locomotion pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum MovementSet {
    /// Input sampling, permission messages and surface probes.
    Prepare,
    /// The controller tick, facing sync and transition logging.
    Controller,
}

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ControllerConfig>()
            .init_resource::<FrameInput>()
            .add_message::<ClimbPermissionChanged>()
            .add_message::<DoubleJumpChanged>()
            .add_message::<PlayerMovementEvent>()
            .configure_sets(
                Update,
                (MovementSet::Prepare, MovementSet::Controller)
                    .chain()
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            )
            .add_systems(
                Update,
                (read_input, apply_permission_changes, detect_surfaces)
                    .chain()
                    .in_set(MovementSet::Prepare),
            )
            .add_systems(
                Update,
                (update_controllers, sync_facing, log_movement_events)
                    .chain()
                    .in_set(MovementSet::Controller),
            )
            .add_systems(
                FixedUpdate,
                fixed_update_controllers
                    .run_if(in_state(GameState::Playing))
                    .run_if(gameplay_active),
            );
    }
}
