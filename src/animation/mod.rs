//! Animation domain: controller-to-animator parameter bridge and sprite states.

mod bridge;
mod parameters;
mod state;


pub use bridge::write_parameters;
pub use parameters::{AnimatorParameters, AnimatorValue};
pub use state::{AnimationController, AnimationState, resolve_state};

use bevy::prelude::*;

use crate::animation::bridge::update_animator_parameters;
use crate::animation::state::apply_animation_state;
use crate::core::GameState;
use crate::movement::MovementSet;

pub struct PlayerAnimationPlugin;

impl Plugin for PlayerAnimationPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (update_animator_parameters, apply_animation_state)
                .chain()
                .after(MovementSet::Controller)
                .run_if(in_state(GameState::Playing)),
        );
    }
}
