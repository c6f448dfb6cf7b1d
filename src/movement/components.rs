//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ControllerConfig, ProbeDef};

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms, ceilings)
    Ground,
    /// Player character
    Player,
    /// Sensors (ladders, pickups) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn flipped(self) -> Self {
        match self {
            Facing::Right => Facing::Left,
            Facing::Left => Facing::Right,
        }
    }
}

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Overlap probes used to detect ground below and ceiling above the player.
#[derive(Component, Debug, Clone)]
pub struct SurfaceProbes {
    pub ground: ProbeDef,
    pub ceiling: Option<ProbeDef>,
}

impl SurfaceProbes {
    pub fn from_config(config: &ControllerConfig) -> Self {
        Self {
            ground: config.ground_probe,
            ceiling: config.ceiling_probe,
        }
    }
}
