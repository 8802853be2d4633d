//! UI plugin - camera setup, quitting, and reporting game events.

use bevy::prelude::*;

use crate::game::{AppleEaten, GameConfig, GameRng, GameSet, GameState, SnakeReset};

/// Plugin for window-level concerns and game flow logging.
pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_system)
            .add_systems(Update, quit_on_escape.in_set(GameSet::Input))
            .add_systems(Update, log_game_events.after(GameSet::Feeding));
    }
}

/// Initial setup system - camera and startup report.
fn setup_system(
    mut commands: Commands,
    config: Res<GameConfig>,
    rng: Res<GameRng>,
    game_state: Res<GameState>,
) {
    commands.spawn(Camera2d);

    info!(
        "Board {}x{} px, {} px cells ({} cells), {} ticks/s, seed {}",
        config.board.width,
        config.board.height,
        config.board.cell_size,
        config.board.total_cells(),
        config.tick_rate,
        rng.seed()
    );
    debug!(
        "Snake starts at {:?} heading {:?}, apple at {:?}",
        game_state.snake.head(),
        game_state.snake.direction(),
        game_state.apple.position()
    );
}

/// System to exit cleanly when Escape is pressed. Closing the window is
/// handled by the window plugin.
fn quit_on_escape(keyboard_input: Res<ButtonInput<KeyCode>>, mut exit: MessageWriter<AppExit>) {
    if keyboard_input.just_pressed(KeyCode::Escape) {
        info!("Escape pressed, quitting");
        exit.write(AppExit::Success);
    }
}

/// System to report resets and meals.
fn log_game_events(
    mut reset_reader: MessageReader<SnakeReset>,
    mut eaten_reader: MessageReader<AppleEaten>,
) {
    for event in eaten_reader.read() {
        debug!(
            "Apple eaten at {:?}, length now {}, next apple at {:?}",
            event.position, event.length, event.next_apple
        );
    }

    for event in reset_reader.read() {
        info!("Snake reset ({:?}) at length {}", event.reason, event.length);
    }
}
