//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// How horizontal velocity reaches its target speed.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize, Default)]
pub enum HorizontalResponse {
    /// Velocity snaps to the target speed every fixed step.
    #[default]
    Instant,
    /// Velocity ramps toward the target (units/s²).
    Ramped { accel: f32, decel: f32 },
}

/// Collider extents and the offset of its center from the body origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct BodyShape {
    pub size: Vec2,
    pub offset: Vec2,
}

/// A circular overlap probe placed relative to the body origin.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ProbeDef {
    pub offset: Vec2,
    pub radius: f32,
}

#[derive(Resource, Debug, Clone, Deserialize, Serialize)]
pub struct ControllerConfig {
    pub move_speed: f32,
    pub run_speed: f32,
    pub crouch_speed: f32,
    pub horizontal_response: HorizontalResponse,
    pub jump_force: f32,
    pub second_jump_force: f32,
    /// Starting value of the double jump permission; pickups can change it later.
    pub double_jump_unlocked: bool,
    pub fall_multiplier: f32,
    pub low_jump_multiplier: f32,
    pub coyote_time: f32,
    pub jump_buffer_time: f32,
    pub ground_probe: ProbeDef,
    /// No ceiling probe means the player may always stand up.
    pub ceiling_probe: Option<ProbeDef>,
    pub standing_shape: BodyShape,
    /// Crouching keeps the standing width.
    pub crouch_height: f32,
    pub crouch_offset: Vec2,
    pub climb_speed: f32,
    pub mass: f32,
    pub gravity_scale: f32,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: 200.0,
            run_speed: 320.0,
            crouch_speed: 100.0,
            horizontal_response: HorizontalResponse::Instant,
            jump_force: 620.0,
            second_jump_force: 520.0,
            double_jump_unlocked: false,
            fall_multiplier: 2.5,
            low_jump_multiplier: 2.0,
            coyote_time: 0.2,
            jump_buffer_time: 0.2,
            ground_probe: ProbeDef {
                offset: Vec2::new(0.0, -24.0),
                radius: 6.0,
            },
            ceiling_probe: Some(ProbeDef {
                offset: Vec2::new(0.0, 20.0),
                radius: 6.0,
            }),
            standing_shape: BodyShape {
                size: Vec2::new(24.0, 48.0),
                offset: Vec2::ZERO,
            },
            crouch_height: 24.0,
            crouch_offset: Vec2::new(0.0, -12.0),
            climb_speed: 150.0,
            mass: 1.0,
            gravity_scale: 1.0,
        }
    }
}

impl ControllerConfig {
    pub fn crouching_shape(&self) -> BodyShape {
        BodyShape {
            size: Vec2::new(self.standing_shape.size.x, self.crouch_height),
            offset: self.crouch_offset,
        }
    }

    /// Peak height of a primary jump from rest, ignoring the low-jump cut.
    /// Uses h = v² / (2g) with v = impulse / mass.
    pub fn single_jump_height(&self, gravity: f32) -> f32 {
        if self.mass <= 0.0 || gravity <= 0.0 {
            return 0.0;
        }
        let v = self.jump_force / self.mass;
        v * v / (2.0 * gravity * self.gravity_scale.max(f32::EPSILON))
    }
}

/// Raw input sampled once per rendered frame.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq)]
pub struct FrameInput {
    pub axis: Vec2,
    pub run_held: bool,
    pub jump_just_pressed: bool,
    pub jump_held: bool,
    pub crouch_just_pressed: bool,
}
