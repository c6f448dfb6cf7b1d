//! Animation state selection from animator parameters.

use bevy::prelude::*;

use crate::animation::AnimatorParameters;
use crate::animation::bridge::{
    IS_CLIMBING, IS_CROUCHING, IS_DOUBLE_JUMPING, IS_FALLING, IS_JUMPING, IS_MOVING, IS_RUNNING,
};

/// Animation states for the player sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Walk,
    Run,
    Crouch,
    Climb,
    Jump,
    DoubleJump,
    Fall,
}

impl AnimationState {
    /// Placeholder tint until sprite sheets exist.
    pub fn tint(self) -> Color {
        match self {
            AnimationState::Idle => Color::srgb(0.9, 0.9, 0.9),
            AnimationState::Walk => Color::srgb(0.85, 0.9, 0.95),
            AnimationState::Run => Color::srgb(0.7, 0.85, 1.0),
            AnimationState::Crouch => Color::srgb(0.75, 0.75, 0.75),
            AnimationState::Climb => Color::srgb(0.85, 0.7, 0.5),
            AnimationState::Jump => Color::srgb(0.95, 0.95, 0.7),
            AnimationState::DoubleJump => Color::srgb(1.0, 0.85, 0.4),
            AnimationState::Fall => Color::srgb(0.8, 0.8, 1.0),
        }
    }
}

/// Tracks the resolved animation state of a sprite.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    pub previous_state: AnimationState,
    /// Seconds spent in the current state.
    pub state_time: f32,
}

impl AnimationController {
    /// Returns true if the state changed.
    pub fn set_state(&mut self, state: AnimationState) -> bool {
        if self.state == state {
            return false;
        }
        self.previous_state = self.state;
        self.state = state;
        self.state_time = 0.0;
        true
    }
}

/// Picks the animation state the parameters describe. Climbing wins over
/// everything, airborne states win over ground locomotion.
pub fn resolve_state(params: &AnimatorParameters) -> AnimationState {
    if params.get_bool(IS_CLIMBING) {
        AnimationState::Climb
    } else if params.get_bool(IS_DOUBLE_JUMPING) {
        AnimationState::DoubleJump
    } else if params.get_bool(IS_JUMPING) {
        AnimationState::Jump
    } else if params.get_bool(IS_FALLING) {
        AnimationState::Fall
    } else if params.get_bool(IS_CROUCHING) {
        AnimationState::Crouch
    } else if params.get_bool(IS_RUNNING) {
        AnimationState::Run
    } else if params.get_bool(IS_MOVING) {
        AnimationState::Walk
    } else {
        AnimationState::Idle
    }
}

pub(crate) fn apply_animation_state(
    time: Res<Time>,
    mut query: Query<(&AnimatorParameters, &mut AnimationController, &mut Sprite)>,
) {
    for (params, mut controller, mut sprite) in &mut query {
        controller.state_time += time.delta_secs();
        let next = resolve_state(params);
        if controller.set_state(next) {
            debug!("Animation {:?} -> {:?}", controller.previous_state, next);
            sprite.color = next.tint();
        }
    }
}
