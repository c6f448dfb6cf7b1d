//! Data definitions for the RON content files.
//!
//! These structs mirror the structure in assets/data/*.ron and are used
//! for deserialization.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

// ============================================================================
// Level layout (level.ron)
// ============================================================================

/// An axis-aligned box given by its center and full size.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct RectDef {
    pub center: Vec2,
    pub size: Vec2,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlatformDef {
    pub id: String,
    pub rect: RectDef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LadderDef {
    pub id: String,
    pub rect: RectDef,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub enum PickupKind {
    DoubleJump,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PickupDef {
    pub id: String,
    pub kind: PickupKind,
    pub position: Vec2,
    pub radius: f32,
}

#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LevelDef {
    pub schema_version: u32,
    pub name: String,
    pub player_spawn: Vec2,
    pub platforms: Vec<PlatformDef>,
    #[serde(default)]
    pub ladders: Vec<LadderDef>,
    #[serde(default)]
    pub pickups: Vec<PickupDef>,
}

impl Default for LevelDef {
    fn default() -> Self {
        let rect = |x: f32, y: f32, w: f32, h: f32| RectDef {
            center: Vec2::new(x, y),
            size: Vec2::new(w, h),
        };

        Self {
            schema_version: 1,
            name: "Fallback".to_string(),
            player_spawn: Vec2::new(-300.0, -120.0),
            platforms: vec![
                PlatformDef {
                    id: "floor".to_string(),
                    rect: rect(0.0, -200.0, 900.0, 40.0),
                },
                PlatformDef {
                    id: "ledge".to_string(),
                    rect: rect(200.0, 40.0, 240.0, 20.0),
                },
            ],
            ladders: vec![LadderDef {
                id: "ladder".to_string(),
                rect: rect(60.0, -70.0, 28.0, 240.0),
            }],
            pickups: vec![PickupDef {
                id: "wings".to_string(),
                kind: PickupKind::DoubleJump,
                position: Vec2::new(260.0, 80.0),
                radius: 10.0,
            }],
        }
    }
}
