//! Movement domain: Avian rigid body adapter for the controller.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{BodyShape, CharacterBody};

/// Builds the capsule collider for a body shape, shifted by its offset.
pub fn shape_collider(shape: BodyShape) -> Collider {
    let radius = shape.size.x * 0.5;
    let length = (shape.size.y - shape.size.x).max(0.0);
    let capsule = Collider::capsule(radius, length);
    if shape.offset == Vec2::ZERO {
        return capsule;
    }
    Collider::compound(vec![(Position::new(shape.offset), Rotation::IDENTITY, capsule)])
}

/// Borrowed view of a player's rigid body.
pub struct AvianBody<'a> {
    velocity: Mut<'a, LinearVelocity>,
    gravity_scale: Mut<'a, GravityScale>,
    collider: Mut<'a, Collider>,
    mass: f32,
}

impl<'a> AvianBody<'a> {
    pub fn new(
        velocity: Mut<'a, LinearVelocity>,
        gravity_scale: Mut<'a, GravityScale>,
        collider: Mut<'a, Collider>,
        mass: &Mass,
    ) -> Self {
        Self {
            velocity,
            gravity_scale,
            collider,
            mass: mass.0,
        }
    }
}

impl CharacterBody for AvianBody<'_> {
    fn velocity(&self) -> Vec2 {
        self.velocity.0
    }

    fn set_velocity(&mut self, velocity: Vec2) {
        self.velocity.0 = velocity;
    }

    fn apply_impulse(&mut self, impulse: Vec2) {
        // Zero or negative mass leaves the body unaffected.
        if self.mass > 0.0 {
            self.velocity.0 += impulse / self.mass;
        }
    }

    fn gravity_scale(&self) -> f32 {
        self.gravity_scale.0
    }

    fn set_gravity_scale(&mut self, scale: f32) {
        self.gravity_scale.0 = scale;
    }

    fn set_shape(&mut self, shape: BodyShape) {
        *self.collider = shape_collider(shape);
    }
}
