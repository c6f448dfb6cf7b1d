//! Forwards controller queries to animator parameters once per frame.

use bevy::prelude::*;

use crate::animation::AnimatorParameters;
use crate::movement::{Player, PlayerController};

pub const IS_GROUNDED: &str = "IsGrounded";
pub const IS_MOVING: &str = "IsMoving";
pub const IS_RUNNING: &str = "IsRunning";
pub const IS_CROUCHING: &str = "IsCrouching";
pub const IS_CLIMBING: &str = "IsClimbing";
pub const SPEED: &str = "Speed";
pub const VERTICAL_VELOCITY: &str = "VerticalVelocity";
pub const CLIMB_SPEED: &str = "ClimbSpeed";
pub const JUMP_COUNT: &str = "JumpCount";
pub const IS_JUMPING: &str = "IsJumping";
pub const IS_DOUBLE_JUMPING: &str = "IsDoubleJumping";
pub const IS_FALLING: &str = "IsFalling";

/// Downward speed above which an airborne player counts as falling.
const FALLING_THRESHOLD: f32 = -0.1;

pub fn write_parameters(controller: &PlayerController, params: &mut AnimatorParameters) {
    let grounded = controller.is_grounded();
    let climbing = controller.is_climbing();
    let jump_count = controller.jump_count();
    let vertical_velocity = controller.vertical_velocity();

    params.set_bool(IS_GROUNDED, grounded);
    params.set_bool(IS_MOVING, controller.is_moving());
    params.set_bool(IS_RUNNING, controller.is_running());
    params.set_bool(IS_CROUCHING, controller.is_crouching());
    params.set_bool(IS_CLIMBING, climbing);

    params.set_float(SPEED, controller.speed());
    params.set_float(VERTICAL_VELOCITY, vertical_velocity);
    params.set_float(CLIMB_SPEED, controller.climb_speed());

    params.set_int(JUMP_COUNT, i32::from(jump_count));

    params.set_bool(IS_JUMPING, jump_count == 1 && !grounded && !climbing);
    params.set_bool(IS_DOUBLE_JUMPING, jump_count == 2 && !climbing);
    params.set_bool(
        IS_FALLING,
        !grounded && !climbing && vertical_velocity < FALLING_THRESHOLD,
    );
}

pub(crate) fn update_animator_parameters(
    mut query: Query<(&PlayerController, &mut AnimatorParameters), With<Player>>,
) {
    for (controller, mut params) in &mut query {
        write_parameters(controller, &mut params);
    }
}
