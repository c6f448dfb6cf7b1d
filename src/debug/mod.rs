//! Debug overlay for tuning the controller (dev-tools feature).
//!
//! F3 toggles a text panel with the player's locomotion state.

use bevy::prelude::*;

use crate::core::GameState;
use crate::movement::{Player, PlayerController};

/// Resource tracking debug overlay state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for debug info overlay text
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(OnEnter(GameState::Playing), spawn_debug_overlay)
            .add_systems(
                Update,
                (toggle_debug_overlay, update_debug_overlay)
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            );
    }
}

fn spawn_debug_overlay(mut commands: Commands, state: Res<DebugState>) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new(""),
        TextFont {
            font_size: 14.0,
            ..default()
        },
        TextColor(Color::srgb(0.7, 1.0, 0.7)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            top: Val::Px(8.0),
            ..default()
        },
        if state.show_info {
            Visibility::Visible
        } else {
            Visibility::Hidden
        },
        DespawnOnExit(GameState::Playing),
    ));
}

fn toggle_debug_overlay(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    mut overlay_query: Query<&mut Visibility, With<DebugInfoOverlay>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }
    state.show_info = !state.show_info;
    for mut visibility in &mut overlay_query {
        *visibility = if state.show_info {
            Visibility::Visible
        } else {
            Visibility::Hidden
        };
    }
}

fn update_debug_overlay(
    state: Res<DebugState>,
    player_query: Query<&PlayerController, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !state.show_info {
        return;
    }
    let Ok(controller) = player_query.single() else {
        return;
    };

    for mut text in &mut overlay_query {
        text.0 = format_controller(controller);
    }
}

pub fn format_controller(controller: &PlayerController) -> String {
    format!(
        "grounded: {}\ncrouching: {}\nclimbing: {} (can_climb: {})\n\
         jumps: {} (double jump: {})\ncoyote: {:.3}\nbuffer: {:.3}\n\
         speed: {:.1}\nvy: {:.1}\nfacing: {:?}",
        controller.is_grounded(),
        controller.is_crouching(),
        controller.is_climbing(),
        controller.can_climb(),
        controller.jump_count(),
        controller.can_double_jump(),
        controller.coyote_timer(),
        controller.jump_buffer_timer(),
        controller.speed(),
        controller.vertical_velocity(),
        controller.facing(),
    )
}
