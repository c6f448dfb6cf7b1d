//! Movement domain: input sampling for locomotion.

use bevy::prelude::*;

use crate::movement::FrameInput;

pub(crate) fn read_input(keyboard: Res<ButtonInput<KeyCode>>, mut input: ResMut<FrameInput>) {
    *input = sample_input(&keyboard);
}

/// Raw digital axes: opposing keys cancel out to zero.
pub(crate) fn sample_input(keyboard: &ButtonInput<KeyCode>) -> FrameInput {
    let mut x = 0.0;
    if keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft) {
        x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight) {
        x += 1.0;
    }

    let mut y = 0.0;
    if keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown) {
        y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp) {
        y += 1.0;
    }

    FrameInput {
        axis: Vec2::new(x, y),
        run_held: keyboard.pressed(KeyCode::ShiftLeft),
        jump_just_pressed: keyboard.just_pressed(KeyCode::Space),
        jump_held: keyboard.pressed(KeyCode::Space),
        crouch_just_pressed: keyboard.just_pressed(KeyCode::KeyS),
    }
}
