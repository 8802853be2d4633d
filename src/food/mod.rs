//! Food plugin - handles apple placement and eating.

use bevy::prelude::*;
use rand::Rng;
use std::collections::HashSet;

use crate::game::{
    AppleEaten, Board, Feeding, GameRng, GameSet, GameState, Position, ResetReason, SnakeReset,
};

/// Plugin for food-related systems.
pub struct FoodPlugin;

impl Plugin for FoodPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, food_collision.in_set(GameSet::Feeding));
    }
}

/// Result of [`Apple::relocate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relocation {
    Placed(Position),
    /// No free cell exists; the apple keeps its old position.
    BoardFull,
}

/// The single piece of food on the board.
#[derive(Clone, Debug)]
pub struct Apple {
    position: Position,
}

impl Apple {
    /// Places a new apple on a cell outside `forbidden`.
    pub fn new(board: &Board, forbidden: &HashSet<Position>, rng: &mut impl Rng) -> Self {
        let mut apple = Apple {
            position: Position::default(),
        };
        apple.relocate(board, forbidden, rng);
        apple
    }

    pub fn position(&self) -> Position {
        self.position
    }

    #[cfg(test)]
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }

    /// Moves to a uniformly random cell not in `forbidden`.
    ///
    /// Random draws are retried at most once per board cell; after that the
    /// free cells are listed and one of them is picked directly.
    pub fn relocate(
        &mut self,
        board: &Board,
        forbidden: &HashSet<Position>,
        rng: &mut impl Rng,
    ) -> Relocation {
        let is_free = |cell: &Position| !forbidden.contains(cell);

        for _ in 0..board.total_cells() {
            let cell = board.cell(
                rng.random_range(0..board.columns()),
                rng.random_range(0..board.rows()),
            );
            if is_free(&cell) {
                self.position = cell;
                return Relocation::Placed(cell);
            }
        }

        let free: Vec<Position> = board.cells().filter(|cell| is_free(cell)).collect();
        if free.is_empty() {
            return Relocation::BoardFull;
        }
        self.position = free[rng.random_range(0..free.len())];
        Relocation::Placed(self.position)
    }
}

/// System to detect the head reaching the apple. Runs every frame; it only
/// acts on the frame the snake steps onto the apple.
fn food_collision(
    mut game_state: ResMut<GameState>,
    mut rng: ResMut<GameRng>,
    mut eaten_writer: MessageWriter<AppleEaten>,
    mut reset_writer: MessageWriter<SnakeReset>,
) {
    let eaten_at = game_state.apple.position();
    match game_state.feed_snake(rng.rng()) {
        Some(Feeding::Grew { length, apple }) => {
            eaten_writer.write(AppleEaten {
                position: eaten_at,
                length,
                next_apple: apple,
            });
        }
        Some(Feeding::BoardCleared { length }) => {
            reset_writer.write(SnakeReset {
                reason: ResetReason::BoardFull,
                length,
            });
        }
        None => {}
    }
}
