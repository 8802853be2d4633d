mod food;
mod game;
mod rendering;
mod snake;
mod ui;

use bevy::{prelude::*, time::common_conditions::on_timer, window::WindowResolution};
use bevy_vector_shapes::prelude::*;
use clap::{CommandFactory, Parser, error::ErrorKind};

use food::FoodPlugin;
use game::{AppleEaten, Cli, GameRng, GameSet, GameState, SnakeReset, WINDOW_TITLE};
use rendering::RenderingPlugin;
use snake::SnakePlugin;
use ui::UiPlugin;

fn main() -> AppExit {
    let config = match Cli::parse().into_config() {
        Ok(config) => config,
        Err(err) => Cli::command().error(ErrorKind::ValueValidation, err).exit(),
    };

    let mut rng = GameRng::new(config.seed);
    let game_state = GameState::new(config.board, rng.rng());
    let tick_interval = config.tick_interval();

    App::new()
        .add_plugins((
            DefaultPlugins.set(WindowPlugin {
                primary_window: Some(Window {
                    resolution: WindowResolution::new(config.board.width, config.board.height),
                    title: WINDOW_TITLE.to_string(),
                    resizable: false,
                    ..default()
                }),
                ..default()
            }),
            Shape2dPlugin::default(),
            SnakePlugin,
            FoodPlugin,
            RenderingPlugin,
            UiPlugin,
        ))
        .insert_resource(ClearColor(config.palette.background.color()))
        .insert_resource(config)
        .insert_resource(rng)
        .insert_resource(game_state)
        .add_message::<SnakeReset>()
        .add_message::<AppleEaten>()
        .configure_sets(
            Update,
            (
                GameSet::Input,
                GameSet::Movement,
                GameSet::Feeding,
                GameSet::Render,
            )
                .chain(),
        )
        .configure_sets(Update, GameSet::Movement.run_if(on_timer(tick_interval)))
        .run()
}
