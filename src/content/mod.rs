//! Content domain: data-driven controller tuning and level layout.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{LadderDef, LevelDef, PickupDef, PickupKind, PlatformDef, RectDef};
pub use loader::{ContentLoadError, load_controller_config, load_level, parse_ron};
pub use validation::{ValidationError, lint_controller_config, validate_level};

use bevy::prelude::*;
use std::path::Path;

use crate::movement::ControllerConfig;

/// Directory holding the RON content files.
pub const CONTENT_PATH: &str = "assets/data";

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, load_content);
    }
}

/// Load content into resources, falling back to built-in defaults on failure.
fn load_content(mut commands: Commands) {
    let base_path = Path::new(CONTENT_PATH);

    let config = match load_controller_config(base_path) {
        Ok(config) => {
            info!("Loaded player controller config");
            config
        }
        Err(e) => {
            warn!("{}; using default controller config", e);
            ControllerConfig::default()
        }
    };
    for warning in lint_controller_config(&config) {
        warn!("Controller config: {}", warning);
    }

    let level = match load_level(base_path) {
        Ok(level) => {
            let errors = validate_level(&level);
            if errors.is_empty() {
                info!(
                    "Loaded level '{}': {} platforms, {} ladders, {} pickups",
                    level.name,
                    level.platforms.len(),
                    level.ladders.len(),
                    level.pickups.len()
                );
                level
            } else {
                for error in &errors {
                    error!("Level validation: {}", error);
                }
                warn!("Level '{}' is invalid; using fallback level", level.name);
                LevelDef::default()
            }
        }
        Err(e) => {
            warn!("{}; using fallback level", e);
            LevelDef::default()
        }
    };

    commands.insert_resource(config);
    commands.insert_resource(level);
}
