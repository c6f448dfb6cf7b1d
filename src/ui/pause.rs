//! UI domain: pause menu toggling, time freeze and exit flow.

use bevy::prelude::*;

use crate::core::{GameState, GameplayPaused};

/// Source name registered in `GameplayPaused` while the menu is open.
pub const PAUSE_SOURCE: &str = "pause_menu";

/// Scene loaded by the exit action.
pub const EXIT_SCENE: GameState = GameState::MainMenu;

/// Resource tracking whether the pause menu is open
#[derive(Resource, Debug, Default)]
pub struct PauseMenu {
    pub is_paused: bool,
}

impl PauseMenu {
    pub fn pause(&mut self, time: &mut Time<Virtual>, gameplay: &mut GameplayPaused) {
        time.pause();
        gameplay.pause(PAUSE_SOURCE);
        self.is_paused = true;
        info!("Game paused");
    }

    pub fn resume(&mut self, time: &mut Time<Virtual>, gameplay: &mut GameplayPaused) {
        time.unpause();
        gameplay.unpause(PAUSE_SOURCE);
        self.is_paused = false;
        info!("Game resumed");
    }

    pub fn toggle(&mut self, time: &mut Time<Virtual>, gameplay: &mut GameplayPaused) {
        if self.is_paused {
            self.resume(time, gameplay);
        } else {
            self.pause(time, gameplay);
        }
    }

    /// Leaves the current scene. Time is restored first so the next scene
    /// does not start frozen.
    pub fn exit(
        &mut self,
        time: &mut Time<Virtual>,
        gameplay: &mut GameplayPaused,
        next_state: &mut NextState<GameState>,
    ) {
        self.resume(time, gameplay);
        info!("Exiting to scene '{}'", EXIT_SCENE.scene_name());
        next_state.set(EXIT_SCENE);
    }
}

/// Marker for the pause menu overlay root
#[derive(Component)]
pub struct PauseMenuRoot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseAction {
    Resume,
    Options,
    Exit,
}

/// Pause menu button
#[derive(Component, Debug)]
pub struct PauseButton {
    pub action: PauseAction,
}

pub(crate) fn spawn_pause_menu(mut commands: Commands) {
    commands
        .spawn((
            PauseMenuRoot,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                right: Val::Px(0.0),
                top: Val::Px(0.0),
                bottom: Val::Px(0.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                row_gap: Val::Px(16.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
            ZIndex(100),
            Visibility::Hidden,
            DespawnOnExit(GameState::Playing),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.9)),
                Node {
                    margin: UiRect::bottom(Val::Px(24.0)),
                    ..default()
                },
            ));

            for (label, action) in [
                ("RESUME", PauseAction::Resume),
                ("OPTIONS", PauseAction::Options),
                ("EXIT", PauseAction::Exit),
            ] {
                parent
                    .spawn((
                        PauseButton { action },
                        Button,
                        Node {
                            width: Val::Px(220.0),
                            padding: UiRect::axes(Val::Px(24.0), Val::Px(12.0)),
                            border: UiRect::all(Val::Px(2.0)),
                            justify_content: JustifyContent::Center,
                            ..default()
                        },
                        BackgroundColor(Color::srgb(0.2, 0.2, 0.25)),
                        BorderColor::all(Color::srgb(0.5, 0.5, 0.6)),
                    ))
                    .with_child((
                        Text::new(label),
                        TextFont {
                            font_size: 24.0,
                            ..default()
                        },
                        TextColor(Color::srgb(0.9, 0.9, 0.9)),
                    ));
            }
        });
}

pub(crate) fn handle_pause_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut menu: ResMut<PauseMenu>,
    mut time: ResMut<Time<Virtual>>,
    mut gameplay: ResMut<GameplayPaused>,
) {
    if keyboard.just_pressed(KeyCode::Escape) {
        menu.toggle(&mut time, &mut gameplay);
    }
}

pub(crate) fn handle_pause_buttons(
    button_query: Query<(&Interaction, &PauseButton), Changed<Interaction>>,
    mut menu: ResMut<PauseMenu>,
    mut time: ResMut<Time<Virtual>>,
    mut gameplay: ResMut<GameplayPaused>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    for (interaction, button) in &button_query {
        if *interaction != Interaction::Pressed || !menu.is_paused {
            continue;
        }

        match button.action {
            PauseAction::Resume => menu.resume(&mut time, &mut gameplay),
            PauseAction::Options => info!("Options menu"),
            PauseAction::Exit => menu.exit(&mut time, &mut gameplay, &mut next_state),
        }
    }
}

pub(crate) fn sync_pause_visibility(
    menu: Res<PauseMenu>,
    mut root_query: Query<&mut Visibility, With<PauseMenuRoot>>,
) {
    if !menu.is_changed() {
        return;
    }
    let visibility = if menu.is_paused {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    for mut root_visibility in &mut root_query {
        *root_visibility = visibility;
    }
}
