//! Core domain: scene states, pause bookkeeping and camera.

mod resources;
mod state;
mod systems;

pub use resources::{GameplayPaused, gameplay_active};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{log_scene_enter, setup_camera};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<GameplayPaused>()
            .add_systems(Startup, setup_camera)
            .add_systems(OnEnter(GameState::MainMenu), log_scene_enter)
            .add_systems(OnEnter(GameState::Playing), log_scene_enter);
    }
}
