//! Content domain: tests for RON parsing and level validation.

use bevy::prelude::*;

use super::{LevelDef, PickupKind, RectDef, lint_controller_config, parse_ron, validate_level};
use crate::movement::{ControllerConfig, HorizontalResponse};

const PLAYER_RON: &str = r#"
(
    move_speed: 5.0,
    run_speed: 8.0,
    crouch_speed: 2.5,
    horizontal_response: Ramped(accel: 60.0, decel: 80.0),
    jump_force: 12.0,
    second_jump_force: 10.0,
    double_jump_unlocked: true,
    fall_multiplier: 2.5,
    low_jump_multiplier: 2.0,
    coyote_time: 0.2,
    jump_buffer_time: 0.2,
    ground_probe: (offset: (0.0, -1.0), radius: 0.2),
    ceiling_probe: None,
    standing_shape: (size: (1.0, 2.0), offset: (0.0, 0.0)),
    crouch_height: 1.0,
    crouch_offset: (0.0, -0.5),
    climb_speed: 3.0,
    mass: 1.0,
    gravity_scale: 1.0,
)
"#;

const LEVEL_RON: &str = r#"
(
    schema_version: 1,
    name: "Test Yard",
    player_spawn: (0.0, 10.0),
    platforms: [
        (id: "floor", rect: (center: (0.0, 0.0), size: (100.0, 10.0))),
    ],
    ladders: [
        (id: "ladder", rect: (center: (20.0, 30.0), size: (4.0, 40.0))),
    ],
    pickups: [
        (id: "wings", kind: DoubleJump, position: (40.0, 20.0), radius: 1.0),
    ],
)
"#;

fn rect(x: f32, y: f32, w: f32, h: f32) -> RectDef {
    RectDef {
        center: Vec2::new(x, y),
        size: Vec2::new(w, h),
    }
}

// -----------------------------------------------------------------------------
// Parsing
// -----------------------------------------------------------------------------

#[test]
fn test_parse_controller_config() {
    let config: ControllerConfig = parse_ron("player.ron", PLAYER_RON).unwrap();
    assert_eq!(config.run_speed, 8.0);
    assert!(config.double_jump_unlocked);
    assert!(config.ceiling_probe.is_none());
    assert_eq!(config.crouch_offset, Vec2::new(0.0, -0.5));
    assert_eq!(
        config.horizontal_response,
        HorizontalResponse::Ramped {
            accel: 60.0,
            decel: 80.0
        }
    );
}

#[test]
fn test_parse_ceiling_probe_without_some() {
    let source = PLAYER_RON.replace(
        "ceiling_probe: None",
        "ceiling_probe: (offset: (0.0, 1.0), radius: 0.2)",
    );
    let config: ControllerConfig = parse_ron("player.ron", &source).unwrap();
    let probe = config.ceiling_probe.unwrap();
    assert_eq!(probe.offset, Vec2::new(0.0, 1.0));
}

#[test]
fn test_parse_error_names_file() {
    let result: Result<ControllerConfig, _> = parse_ron("player.ron", "(move_speed: )");
    let error = result.unwrap_err();
    assert_eq!(error.file, "player.ron");
    assert!(error.to_string().starts_with("Failed to load player.ron"));
}

#[test]
fn test_parse_level() {
    let level: LevelDef = parse_ron("level.ron", LEVEL_RON).unwrap();
    assert_eq!(level.name, "Test Yard");
    assert_eq!(level.platforms.len(), 1);
    assert_eq!(level.ladders[0].rect, rect(20.0, 30.0, 4.0, 40.0));
    assert_eq!(level.pickups[0].kind, PickupKind::DoubleJump);
    assert!(validate_level(&level).is_empty());
}

#[test]
fn test_level_ladders_and_pickups_optional() {
    let source = r#"(
        schema_version: 1,
        name: "Bare",
        player_spawn: (0.0, 0.0),
        platforms: [(id: "floor", rect: (center: (0.0, 0.0), size: (10.0, 1.0)))],
    )"#;
    let level: LevelDef = parse_ron("level.ron", source).unwrap();
    assert!(level.ladders.is_empty());
    assert!(level.pickups.is_empty());
}

#[test]
fn test_shipped_content_parses() {
    let player = include_str!("../../assets/data/player.ron");
    let level = include_str!("../../assets/data/level.ron");

    let _: ControllerConfig = parse_ron("player.ron", player).unwrap();
    let level: LevelDef = parse_ron("level.ron", level).unwrap();
    assert!(validate_level(&level).is_empty());
}

// -----------------------------------------------------------------------------
// Validation
// -----------------------------------------------------------------------------

#[test]
fn test_default_level_is_valid() {
    assert!(validate_level(&LevelDef::default()).is_empty());
}

#[test]
fn test_level_without_platforms_is_invalid() {
    let level = LevelDef {
        platforms: Vec::new(),
        ..LevelDef::default()
    };
    let errors = validate_level(&level);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "platforms");
}

#[test]
fn test_degenerate_shapes_and_duplicate_ids() {
    let mut level = LevelDef::default();
    level.ladders[0].rect.size = Vec2::new(0.0, 10.0);
    level.ladders[0].id = "floor".to_string();
    level.pickups[0].radius = -1.0;

    let errors = validate_level(&level);
    let fields: Vec<_> = errors.iter().map(|e| (e.source_type, e.field)).collect();
    assert!(fields.contains(&("Ladder", "id")));
    assert!(fields.contains(&("Ladder", "size")));
    assert!(fields.contains(&("Pickup", "radius")));
    assert_eq!(errors.len(), 3);
}

#[test]
fn test_lint_controller_config() {
    assert!(lint_controller_config(&ControllerConfig::default()).is_empty());

    let config = ControllerConfig {
        coyote_time: -0.1,
        mass: 0.0,
        crouch_height: 100.0,
        ..ControllerConfig::default()
    };
    let warnings = lint_controller_config(&config);
    assert_eq!(warnings.len(), 3);
    assert!(warnings[0].contains("coyote_time"));
}
