//! UI domain: main menu and pause menu.

mod main_menu;
mod pause;

#[cfg(test)]
mod tests;

pub use pause::PauseMenu;

use bevy::prelude::*;

use crate::core::GameState;
use crate::ui::main_menu::{spawn_main_menu, start_game};
use crate::ui::pause::{
    handle_pause_buttons, handle_pause_key, spawn_pause_menu, sync_pause_visibility,
};

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PauseMenu>()
            .add_systems(OnEnter(GameState::MainMenu), spawn_main_menu)
            .add_systems(Update, start_game.run_if(in_state(GameState::MainMenu)))
            .add_systems(OnEnter(GameState::Playing), spawn_pause_menu)
            .add_systems(
                Update,
                (handle_pause_key, handle_pause_buttons, sync_pause_visibility)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
