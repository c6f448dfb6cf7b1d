//! Core domain: game state definitions for scene flow.

use bevy::prelude::*;

/// Top-level scenes. Entities spawned for a scene are despawned when it exits.
#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Copy, Default)]
pub enum GameState {
    #[default]
    MainMenu,
    Playing,
}

impl GameState {
    /// Scene name as used by menu actions and logs.
    pub fn scene_name(self) -> &'static str {
        match self {
            GameState::MainMenu => "MainMenu",
            GameState::Playing => "Level",
        }
    }
}
