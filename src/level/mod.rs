//! Level domain: scene spawning from level data and pickups.

mod pickups;
mod spawn;

use bevy::prelude::*;

use crate::core::GameState;
use crate::level::pickups::collect_pickups;
use crate::level::spawn::spawn_level;
use crate::movement::MovementSet;

pub struct LevelPlugin;

impl Plugin for LevelPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_level)
            .add_systems(
                Update,
                collect_pickups
                    .after(MovementSet::Controller)
                    .run_if(in_state(GameState::Playing)),
            );
    }
}
