//! Movement domain: the player locomotion state machine.
//!
//! `PlayerController` owns every piece of per-player locomotion state and is
//! advanced in two phases:
//!
//! - [`PlayerController::update`] once per rendered frame (input edges,
//!   sensors, timers, climb, jump resolution, crouch);
//! - [`PlayerController::fixed_update`] zero or more times per frame at the
//!   fixed physics rate (velocity integration and gravity shaping).
//!
//! Physics access goes through [`CharacterBody`] and the sensors arrive as
//! plain [`SensorReadings`], so the state machine has no ECS dependency of
//! its own and can be driven directly in tests.

use bevy::prelude::*;

use crate::movement::{BodyShape, ControllerConfig, Facing, FrameInput, HorizontalResponse};

/// Inputs below this magnitude count as released.
pub const AXIS_DEADZONE: f32 = 0.1;

/// The physics capabilities the controller needs from its rigid body.
pub trait CharacterBody {
    fn velocity(&self) -> Vec2;
    fn set_velocity(&mut self, velocity: Vec2);
    /// Instantaneous change of momentum.
    fn apply_impulse(&mut self, impulse: Vec2);
    fn gravity_scale(&self) -> f32;
    fn set_gravity_scale(&mut self, scale: f32);
    fn set_shape(&mut self, shape: BodyShape);
}

/// Overlap probe results for the current frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensorReadings {
    pub grounded: bool,
    pub ceiling_clear: bool,
}

impl Default for SensorReadings {
    fn default() -> Self {
        Self {
            grounded: false,
            ceiling_clear: true,
        }
    }
}

/// Per-frame context for the variable-timestep phase.
#[derive(Debug, Clone, Copy, Default)]
pub struct FrameContext {
    pub dt: f32,
    pub input: FrameInput,
    pub sensors: SensorReadings,
}

/// Per-step context for the fixed-timestep phase.
#[derive(Debug, Clone, Copy)]
pub struct FixedContext {
    pub dt: f32,
    /// World gravity acceleration, negative y pointing down.
    pub gravity: Vec2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
    Ladder,
}

/// State transitions produced by a controller tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MovementEvent {
    Landed,
    LeftGround,
    Jumped(JumpKind),
    ClimbStarted,
    ClimbStopped,
    CrouchStarted,
    CrouchStopped,
    Turned(Facing),
}

#[derive(Component, Debug, Clone, Default)]
pub struct PlayerController {
    grounded: bool,
    crouching: bool,
    climbing: bool,
    can_stand_up: bool,
    facing: Facing,
    jump_count: u8,
    coyote_timer: f32,
    jump_buffer_timer: f32,
    input: FrameInput,
    velocity: Vec2,
    can_double_jump: bool,
    can_climb: bool,
    pre_climb_gravity_scale: f32,
}

impl PlayerController {
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            can_stand_up: true,
            can_double_jump: config.double_jump_unlocked,
            pre_climb_gravity_scale: config.gravity_scale,
            ..default()
        }
    }

    // ------------------------------------------------------------------
    // Variable-timestep phase
    // ------------------------------------------------------------------

    pub fn update(
        &mut self,
        ctx: &FrameContext,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
    ) -> Vec<MovementEvent> {
        let mut events = Vec::new();

        self.input = ctx.input;
        if ctx.input.jump_just_pressed {
            self.jump_buffer_timer = config.jump_buffer_time;
        }

        let was_grounded = self.grounded;
        self.grounded = ctx.sensors.grounded;
        if self.grounded && !was_grounded {
            self.jump_count = 0;
            events.push(MovementEvent::Landed);
        } else if !self.grounded && was_grounded {
            events.push(MovementEvent::LeftGround);
        }

        self.can_stand_up = ctx.sensors.ceiling_clear;

        self.coyote_timer = if self.grounded {
            config.coyote_time
        } else {
            (self.coyote_timer - ctx.dt).max(0.0)
        };
        self.jump_buffer_timer -= ctx.dt;

        self.handle_climb(config, body, &mut events);
        self.handle_jump(config, body, &mut events);
        self.handle_crouch(config, body, &mut events);

        self.velocity = body.velocity();
        events
    }

    fn handle_climb(
        &mut self,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
        events: &mut Vec<MovementEvent>,
    ) {
        if !self.climbing && self.can_climb && self.input.axis.y.abs() > AXIS_DEADZONE {
            self.start_climb(config, body, events);
        } else if self.climbing && !self.can_climb {
            self.stop_climb(body, events);
        }
        // A buffered jump while climbing is resolved as a ladder jump below,
        // which also leaves the ladder.
    }

    fn handle_jump(
        &mut self,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
        events: &mut Vec<MovementEvent>,
    ) {
        if self.jump_buffer_timer <= 0.0 {
            return;
        }

        if self.climbing {
            // Ladder jumps leave jump_count unchanged.
            self.stop_climb(body, events);
            jump(body, config.jump_force);
            self.jump_buffer_timer = 0.0;
            events.push(MovementEvent::Jumped(JumpKind::Ladder));
        } else if self.coyote_timer > 0.0 && self.jump_count == 0 {
            if self.crouching {
                self.stop_crouch(config, body, events);
            }
            jump(body, config.jump_force);
            self.jump_count = 1;
            self.jump_buffer_timer = 0.0;
            self.coyote_timer = 0.0;
            events.push(MovementEvent::Jumped(JumpKind::Ground));
        } else if self.can_double_jump && self.jump_count == 1 {
            jump(body, config.second_jump_force);
            self.jump_count = 2;
            self.jump_buffer_timer = 0.0;
            events.push(MovementEvent::Jumped(JumpKind::Double));
        }
    }

    fn handle_crouch(
        &mut self,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
        events: &mut Vec<MovementEvent>,
    ) {
        if self.climbing || !self.grounded || !self.input.crouch_just_pressed {
            return;
        }

        if !self.crouching {
            self.start_crouch(config, body, events);
        } else if self.can_stand_up {
            self.stop_crouch(config, body, events);
        }
    }

    fn start_climb(
        &mut self,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
        events: &mut Vec<MovementEvent>,
    ) {
        self.climbing = true;
        self.pre_climb_gravity_scale = body.gravity_scale();
        body.set_gravity_scale(0.0);
        body.set_velocity(Vec2::ZERO);
        events.push(MovementEvent::ClimbStarted);
        // No ceiling check here: ladders are assumed to have headroom.
        if self.crouching {
            self.stop_crouch(config, body, events);
        }
    }

    fn stop_climb(&mut self, body: &mut impl CharacterBody, events: &mut Vec<MovementEvent>) {
        self.climbing = false;
        body.set_gravity_scale(self.pre_climb_gravity_scale);
        events.push(MovementEvent::ClimbStopped);
    }

    fn start_crouch(
        &mut self,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
        events: &mut Vec<MovementEvent>,
    ) {
        self.crouching = true;
        body.set_shape(config.crouching_shape());
        events.push(MovementEvent::CrouchStarted);
    }

    fn stop_crouch(
        &mut self,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
        events: &mut Vec<MovementEvent>,
    ) {
        self.crouching = false;
        body.set_shape(config.standing_shape);
        events.push(MovementEvent::CrouchStopped);
    }

    // ------------------------------------------------------------------
    // Fixed-timestep phase
    // ------------------------------------------------------------------

    pub fn fixed_update(
        &mut self,
        ctx: &FixedContext,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
    ) -> Option<MovementEvent> {
        if self.climbing {
            body.set_velocity(self.input.axis * config.climb_speed);
        } else {
            self.apply_horizontal(ctx.dt, config, body);
            self.apply_jump_physics(ctx, config, body);
        }

        self.velocity = body.velocity();
        self.update_facing()
    }

    fn target_speed(&self, config: &ControllerConfig) -> f32 {
        let speed = if self.crouching {
            config.crouch_speed
        } else if self.input.run_held {
            config.run_speed
        } else {
            config.move_speed
        };
        self.input.axis.x * speed
    }

    fn apply_horizontal(&self, dt: f32, config: &ControllerConfig, body: &mut impl CharacterBody) {
        let target_vx = self.target_speed(config);
        let mut velocity = body.velocity();

        velocity.x = match config.horizontal_response {
            HorizontalResponse::Instant => target_vx,
            HorizontalResponse::Ramped { accel, decel } => {
                if self.input.axis.x.abs() > AXIS_DEADZONE {
                    let step = accel * dt;
                    if velocity.x < target_vx {
                        (velocity.x + step).min(target_vx)
                    } else {
                        (velocity.x - step).max(target_vx)
                    }
                } else {
                    let step = decel * dt;
                    if velocity.x > 0.0 {
                        (velocity.x - step).max(0.0)
                    } else {
                        (velocity.x + step).min(0.0)
                    }
                }
            }
        };

        body.set_velocity(velocity);
    }

    fn apply_jump_physics(
        &self,
        ctx: &FixedContext,
        config: &ControllerConfig,
        body: &mut impl CharacterBody,
    ) {
        let mut velocity = body.velocity();
        if velocity.y < 0.0 {
            velocity.y += ctx.gravity.y * (config.fall_multiplier - 1.0) * ctx.dt;
        } else if velocity.y > 0.0 && !self.input.jump_held {
            velocity.y += ctx.gravity.y * (config.low_jump_multiplier - 1.0) * ctx.dt;
        } else {
            return;
        }
        body.set_velocity(velocity);
    }

    fn update_facing(&mut self) -> Option<MovementEvent> {
        let x = self.input.axis.x;
        let turned = match self.facing {
            Facing::Right => x < 0.0,
            Facing::Left => x > 0.0,
        };
        if !turned {
            return None;
        }
        self.facing = self.facing.flipped();
        Some(MovementEvent::Turned(self.facing))
    }

    // ------------------------------------------------------------------
    // External permissions
    // ------------------------------------------------------------------

    /// Grants or revokes ladder access. Losing it mid-climb drops the player.
    pub fn set_can_climb(
        &mut self,
        value: bool,
        body: &mut impl CharacterBody,
    ) -> Option<MovementEvent> {
        self.can_climb = value;
        if value || !self.climbing {
            return None;
        }
        let mut events = Vec::new();
        self.stop_climb(body, &mut events);
        events.pop()
    }

    pub fn enable_double_jump(&mut self) {
        self.can_double_jump = true;
    }

    pub fn disable_double_jump(&mut self) {
        self.can_double_jump = false;
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn is_moving(&self) -> bool {
        self.input.axis.x.abs() > AXIS_DEADZONE
    }

    pub fn is_running(&self) -> bool {
        self.input.run_held && !self.crouching && !self.climbing && self.is_moving()
    }

    pub fn is_crouching(&self) -> bool {
        self.crouching
    }

    pub fn is_climbing(&self) -> bool {
        self.climbing
    }

    /// Horizontal speed, always non-negative.
    pub fn speed(&self) -> f32 {
        self.velocity.x.abs()
    }

    pub fn vertical_velocity(&self) -> f32 {
        self.velocity.y
    }

    pub fn jump_count(&self) -> u8 {
        self.jump_count
    }

    /// Magnitude of the vertical climb input, used to drive climb animation speed.
    pub fn climb_speed(&self) -> f32 {
        self.input.axis.y.abs()
    }

    pub fn facing(&self) -> Facing {
        self.facing
    }

    pub fn can_climb(&self) -> bool {
        self.can_climb
    }

    pub fn can_double_jump(&self) -> bool {
        self.can_double_jump
    }

    pub fn coyote_timer(&self) -> f32 {
        self.coyote_timer
    }

    pub fn jump_buffer_timer(&self) -> f32 {
        self.jump_buffer_timer
    }
}

/// Replaces vertical velocity with an upward impulse.
fn jump(body: &mut impl CharacterBody, force: f32) {
    let velocity = body.velocity();
    body.set_velocity(Vec2::new(velocity.x, 0.0));
    body.apply_impulse(Vec2::Y * force);
}
