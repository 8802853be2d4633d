//! Start-of-process configuration: defaults, command-line overrides, validation.

use bevy::prelude::*;
use clap::Parser;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

use super::{
    APPLE_COLOR, BACKGROUND_COLOR, BORDER_COLOR, Board, CELL_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH,
    SNAKE_COLOR, TICK_RATE,
};

/// Reasons a configuration is rejected before the window opens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be non-zero")]
    Zero { name: &'static str },
    #[error("cell size {cell_size} does not evenly divide the {axis} {extent}")]
    Misaligned {
        axis: &'static str,
        extent: u32,
        cell_size: u32,
    },
    #[error("{axis} {extent} does not fit in a signed 32-bit pixel coordinate")]
    TooLarge { axis: &'static str, extent: u32 },
    #[error("board must contain at least two cells, got {cells}")]
    BoardTooSmall { cells: usize },
    #[error("invalid color `{0}`, expected `r,g,b` with components 0-255")]
    InvalidColor(String),
}

/// An sRGB color given as three bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub [u8; 3]);

impl Rgb {
    pub fn color(&self) -> Color {
        let [r, g, b] = self.0;
        Color::srgb_u8(r, g, b)
    }
}

impl FromStr for Rgb {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ConfigError::InvalidColor(s.to_string());
        let mut channels = [0u8; 3];
        let mut parts = s.split(',');
        for channel in channels.iter_mut() {
            let part = parts.next().ok_or_else(invalid)?;
            *channel = part.trim().parse().map_err(|_| invalid())?;
        }
        if parts.next().is_some() {
            return Err(invalid());
        }
        Ok(Rgb(channels))
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "{r},{g},{b}")
    }
}

/// The four colors the board is drawn with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Palette {
    pub background: Rgb,
    pub border: Rgb,
    pub apple: Rgb,
    pub snake: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            background: Rgb(BACKGROUND_COLOR),
            border: Rgb(BORDER_COLOR),
            apple: Rgb(APPLE_COLOR),
            snake: Rgb(SNAKE_COLOR),
        }
    }
}

/// Validated game configuration, fixed for the lifetime of the process.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct GameConfig {
    pub board: Board,
    /// Game updates per second.
    pub tick_rate: u32,
    pub palette: Palette,
    /// Seed for the game RNG; drawn at random when absent.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            board: Board {
                width: SCREEN_WIDTH,
                height: SCREEN_HEIGHT,
                cell_size: CELL_SIZE,
            },
            tick_rate: TICK_RATE,
            palette: Palette::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new(
        board: Board,
        tick_rate: u32,
        palette: Palette,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        for (name, value) in [
            ("width", board.width),
            ("height", board.height),
            ("cell size", board.cell_size),
            ("tick rate", tick_rate),
        ] {
            if value == 0 {
                return Err(ConfigError::Zero { name });
            }
        }

        for (axis, extent) in [("width", board.width), ("height", board.height)] {
            if i32::try_from(extent).is_err() {
                return Err(ConfigError::TooLarge { axis, extent });
            }
            if extent % board.cell_size != 0 {
                return Err(ConfigError::Misaligned {
                    axis,
                    extent,
                    cell_size: board.cell_size,
                });
            }
        }

        let cells = board.total_cells();
        if cells < 2 {
            return Err(ConfigError::BoardTooSmall { cells });
        }

        Ok(GameConfig {
            board,
            tick_rate,
            palette,
            seed,
        })
    }

    /// Time between two game ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.tick_rate as f64)
    }
}

/// Command-line overrides for the defaults in `game::constants`.
#[derive(Parser, Debug)]
#[command(name = "wrap_snake", about = "Classic wrap-around Snake")]
pub struct Cli {
    /// Board width in pixels
    #[arg(long, default_value_t = SCREEN_WIDTH)]
    pub width: u32,
    /// Board height in pixels
    #[arg(long, default_value_t = SCREEN_HEIGHT)]
    pub height: u32,
    /// Cell size in pixels, must divide width and height
    #[arg(long, default_value_t = CELL_SIZE)]
    pub cell_size: u32,
    /// Game updates per second
    #[arg(long, default_value_t = TICK_RATE)]
    pub tick_rate: u32,
    /// Seed for reproducible apple placement and reset directions
    #[arg(long)]
    pub seed: Option<u64>,
    #[arg(long, default_value_t = Rgb(BACKGROUND_COLOR))]
    pub background: Rgb,
    #[arg(long, default_value_t = Rgb(BORDER_COLOR))]
    pub border: Rgb,
    #[arg(long, default_value_t = Rgb(APPLE_COLOR))]
    pub apple: Rgb,
    #[arg(long, default_value_t = Rgb(SNAKE_COLOR))]
    pub snake: Rgb,
}

impl Cli {
    pub fn into_config(self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(
            Board {
                width: self.width,
                height: self.height,
                cell_size: self.cell_size,
            },
            self.tick_rate,
            Palette {
                background: self.background,
                border: self.border,
                apple: self.apple,
                snake: self.snake,
            },
            self.seed,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, Position};

    fn board(width: u32, height: u32, cell_size: u32) -> Board {
        Board {
            width,
            height,
            cell_size,
        }
    }

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board.width, 640);
        assert_eq!(config.board.height, 480);
        assert_eq!(config.board.cell_size, 20);
        assert_eq!(config.tick_rate, 10);
        assert_eq!(config.tick_interval(), Duration::from_millis(100));
        assert_eq!(config.palette.border, Rgb([93, 216, 228]));
    }

    #[test]
    fn test_cli_defaults_match_constants() {
        let cli = Cli::parse_from(["wrap_snake"]);
        assert_eq!(cli.into_config(), Ok(GameConfig::default()));
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from([
            "wrap_snake",
            "--width",
            "300",
            "--height",
            "200",
            "--cell-size",
            "10",
            "--tick-rate",
            "20",
            "--seed",
            "7",
            "--snake",
            "1,2,3",
        ]);
        let config = cli.into_config().unwrap();
        assert_eq!(config.board, board(300, 200, 10));
        assert_eq!(config.tick_rate, 20);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.palette.snake, Rgb([1, 2, 3]));
        assert_eq!(config.palette.apple, Rgb(APPLE_COLOR));
    }

    #[test]
    fn test_rejects_misaligned_cell_size() {
        let result = GameConfig::new(board(640, 470, 20), 10, Palette::default(), None);
        assert_eq!(
            result,
            Err(ConfigError::Misaligned {
                axis: "height",
                extent: 470,
                cell_size: 20,
            })
        );
    }

    #[test]
    fn test_rejects_extent_beyond_i32() {
        let result = GameConfig::new(board(4_294_967_280, 40, 20), 10, Palette::default(), None);
        assert_eq!(
            result,
            Err(ConfigError::TooLarge {
                axis: "width",
                extent: 4_294_967_280,
            })
        );

        let largest = (i32::MAX as u32 / 20) * 20;
        let config = GameConfig::new(board(40, largest, 20), 10, Palette::default(), None).unwrap();
        let bottom = Position::new(0, largest as i32 - 20);
        assert_eq!(
            config.board.step(Position::new(0, 0), Direction::Up),
            bottom
        );
        assert_eq!(
            config.board.step(bottom, Direction::Down),
            Position::new(0, 0)
        );
    }

    #[test]
    fn test_rejects_zero_values() {
        let result = GameConfig::new(board(640, 480, 0), 10, Palette::default(), None);
        assert_eq!(result, Err(ConfigError::Zero { name: "cell size" }));

        let result = GameConfig::new(board(640, 480, 20), 0, Palette::default(), None);
        assert_eq!(result, Err(ConfigError::Zero { name: "tick rate" }));
    }

    #[test]
    fn test_rejects_single_cell_board() {
        let result = GameConfig::new(board(20, 20, 20), 10, Palette::default(), None);
        assert_eq!(result, Err(ConfigError::BoardTooSmall { cells: 1 }));
    }

    #[test]
    fn test_parse_rgb() {
        assert_eq!("93, 216,228".parse::<Rgb>(), Ok(Rgb([93, 216, 228])));
        assert!("1,2".parse::<Rgb>().is_err());
        assert!("1,2,3,4".parse::<Rgb>().is_err());
        assert!("256,0,0".parse::<Rgb>().is_err());
        assert_eq!(Rgb([1, 2, 3]).to_string(), "1,2,3");
    }
}
