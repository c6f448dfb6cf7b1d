//! Core domain: camera setup and scene transition logging.

use bevy::prelude::*;

use crate::core::state::GameState;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

pub(crate) fn log_scene_enter(state: Res<State<GameState>>) {
    info!("Loaded scene '{}'", state.get().scene_name());
}
