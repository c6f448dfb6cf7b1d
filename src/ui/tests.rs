//! UI domain: tests for pause menu state and the exit flow.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;

use super::PauseMenu;
use super::pause::{
    EXIT_SCENE, PauseAction, PauseButton, PauseMenuRoot, handle_pause_buttons, handle_pause_key,
    sync_pause_visibility,
};
use crate::core::{GameState, GameplayPaused};

fn pause_fixtures() -> (PauseMenu, Time<Virtual>, GameplayPaused) {
    (
        PauseMenu::default(),
        Time::<Virtual>::default(),
        GameplayPaused::default(),
    )
}

// -----------------------------------------------------------------------------
// Pause and resume
// -----------------------------------------------------------------------------

#[test]
fn test_menu_starts_unpaused() {
    let (menu, time, gameplay) = pause_fixtures();
    assert!(!menu.is_paused);
    assert!(!time.is_paused());
    assert!(!gameplay.is_paused());
}

#[test]
fn test_pause_freezes_time_and_gameplay() {
    let (mut menu, mut time, mut gameplay) = pause_fixtures();
    menu.pause(&mut time, &mut gameplay);

    assert!(menu.is_paused);
    assert!(time.is_paused());
    assert!(gameplay.is_paused());

    menu.resume(&mut time, &mut gameplay);
    assert!(!menu.is_paused);
    assert!(!time.is_paused());
    assert!(!gameplay.is_paused());
}

#[test]
fn test_toggle_alternates() {
    let (mut menu, mut time, mut gameplay) = pause_fixtures();
    menu.toggle(&mut time, &mut gameplay);
    assert!(menu.is_paused);
    menu.toggle(&mut time, &mut gameplay);
    assert!(!menu.is_paused);
    assert!(!time.is_paused());
}

#[test]
fn test_resume_keeps_other_pause_sources() {
    let (mut menu, mut time, mut gameplay) = pause_fixtures();
    gameplay.pause("cutscene");
    menu.pause(&mut time, &mut gameplay);
    menu.resume(&mut time, &mut gameplay);

    assert!(!time.is_paused());
    assert!(gameplay.is_paused());
}

// -----------------------------------------------------------------------------
// Exit
// -----------------------------------------------------------------------------

fn exit_from_menu(
    mut menu: ResMut<PauseMenu>,
    mut time: ResMut<Time<Virtual>>,
    mut gameplay: ResMut<GameplayPaused>,
    mut next_state: ResMut<NextState<GameState>>,
) {
    if menu.is_paused {
        menu.exit(&mut time, &mut gameplay, &mut next_state);
    }
}

#[test]
fn test_exit_resumes_then_loads_main_menu() {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_state(GameState::Playing)
        .init_resource::<PauseMenu>()
        .init_resource::<GameplayPaused>()
        .add_systems(Update, exit_from_menu);

    {
        let world = app.world_mut();
        world.resource_scope(|world, mut menu: Mut<PauseMenu>| {
            world.resource_scope(|world, mut time: Mut<Time<Virtual>>| {
                let mut gameplay = world.resource_mut::<GameplayPaused>();
                menu.pause(&mut time, &mut gameplay);
            });
        });
    }

    app.update();
    app.update();

    let world = app.world();
    assert_eq!(*world.resource::<State<GameState>>().get(), EXIT_SCENE);
    assert!(!world.resource::<PauseMenu>().is_paused);
    assert!(!world.resource::<Time<Virtual>>().is_paused());
    assert!(!world.resource::<GameplayPaused>().is_paused());
}

// -----------------------------------------------------------------------------
// Input and visibility
// -----------------------------------------------------------------------------

fn pause_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin))
        .insert_state(GameState::Playing)
        .init_resource::<ButtonInput<KeyCode>>()
        .init_resource::<PauseMenu>()
        .init_resource::<GameplayPaused>()
        .add_systems(
            Update,
            (handle_pause_key, handle_pause_buttons, sync_pause_visibility).chain(),
        );
    let root = app
        .world_mut()
        .spawn((PauseMenuRoot, Visibility::Hidden))
        .id();
    (app, root)
}

/// Starts a fresh Escape press edge.
fn press_escape(app: &mut App) {
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release(KeyCode::Escape);
    keyboard.clear();
    keyboard.press(KeyCode::Escape);
}

fn release_keys(app: &mut App) {
    let mut keyboard = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    keyboard.release_all();
    keyboard.clear();
}

fn assert_paused(app: &App, root: Entity, paused: bool) {
    let world = app.world();
    let expected = if paused {
        Visibility::Visible
    } else {
        Visibility::Hidden
    };
    assert_eq!(world.resource::<PauseMenu>().is_paused, paused);
    assert_eq!(world.resource::<Time<Virtual>>().is_paused(), paused);
    assert_eq!(world.resource::<GameplayPaused>().is_paused(), paused);
    assert_eq!(*world.get::<Visibility>(root).unwrap(), expected);
}

#[test]
fn test_escape_toggles_pause_and_root_visibility() {
    let (mut app, root) = pause_app();
    app.update();
    assert_paused(&app, root, false);

    press_escape(&mut app);
    app.update();
    assert_paused(&app, root, true);

    // Holding the key is not a new edge
    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .clear();
    app.update();
    assert_paused(&app, root, true);

    press_escape(&mut app);
    app.update();
    assert_paused(&app, root, false);
}

#[test]
fn test_resume_button_unpauses() {
    let (mut app, root) = pause_app();
    press_escape(&mut app);
    app.update();
    assert_paused(&app, root, true);

    release_keys(&mut app);
    app.world_mut().spawn((
        Interaction::Pressed,
        PauseButton {
            action: PauseAction::Resume,
        },
    ));
    app.update();
    assert_paused(&app, root, false);
}

#[test]
fn test_buttons_ignored_while_running() {
    let (mut app, root) = pause_app();
    app.world_mut().spawn((
        Interaction::Pressed,
        PauseButton {
            action: PauseAction::Exit,
        },
    ));
    app.update();
    app.update();

    assert_paused(&app, root, false);
    assert_eq!(
        *app.world().resource::<State<GameState>>().get(),
        GameState::Playing
    );
}
