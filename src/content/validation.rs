//! Validation for level and controller content.

use std::collections::HashSet;

use super::data::{LevelDef, RectDef};
use crate::movement::ControllerConfig;

/// A validation error with context about what failed.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub source_id: String,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} '{}' has invalid field '{}': {}",
            self.source_type, self.source_id, self.field, self.message
        )
    }
}

/// Helper macro for checking a rect has a positive area
macro_rules! check_rect {
    ($errors:expr, $source_type:expr, $source_id:expr, $rect:expr) => {
        if !rect_has_area(&$rect) {
            $errors.push(ValidationError {
                source_type: $source_type,
                source_id: $source_id.to_string(),
                field: "size",
                message: format!("expected positive size, got {:?}", $rect.size),
            });
        }
    };
}

fn rect_has_area(rect: &RectDef) -> bool {
    rect.size.x > 0.0 && rect.size.y > 0.0
}

/// Validate a level layout.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &LevelDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if level.platforms.is_empty() {
        errors.push(ValidationError {
            source_type: "Level",
            source_id: level.name.clone(),
            field: "platforms",
            message: "a level needs at least one platform".to_string(),
        });
    }

    let mut seen = HashSet::new();
    let ids = level
        .platforms
        .iter()
        .map(|p| ("Platform", &p.id))
        .chain(level.ladders.iter().map(|l| ("Ladder", &l.id)))
        .chain(level.pickups.iter().map(|p| ("Pickup", &p.id)));
    for (source_type, id) in ids {
        if !seen.insert(id.as_str()) {
            errors.push(ValidationError {
                source_type,
                source_id: id.clone(),
                field: "id",
                message: "duplicate id".to_string(),
            });
        }
    }

    for platform in &level.platforms {
        check_rect!(errors, "Platform", platform.id, platform.rect);
    }
    for ladder in &level.ladders {
        check_rect!(errors, "Ladder", ladder.id, ladder.rect);
    }
    for pickup in &level.pickups {
        if pickup.radius <= 0.0 {
            errors.push(ValidationError {
                source_type: "Pickup",
                source_id: pickup.id.clone(),
                field: "radius",
                message: format!("expected positive radius, got {}", pickup.radius),
            });
        }
    }

    errors
}

/// Flag controller tuning that would make the character behave degenerately.
/// The controller itself accepts any values; these are warnings only.
pub fn lint_controller_config(config: &ControllerConfig) -> Vec<String> {
    let mut warnings = Vec::new();

    let durations = [
        ("coyote_time", config.coyote_time),
        ("jump_buffer_time", config.jump_buffer_time),
    ];
    for (name, value) in durations {
        if value < 0.0 {
            warnings.push(format!("{} is negative ({})", name, value));
        }
    }

    if config.mass <= 0.0 {
        warnings.push(format!("mass must be positive for jumps to apply ({})", config.mass));
    }
    if config.crouch_height > config.standing_shape.size.y {
        warnings.push(format!(
            "crouch_height {} exceeds standing height {}",
            config.crouch_height, config.standing_shape.size.y
        ));
    }

    warnings
}
