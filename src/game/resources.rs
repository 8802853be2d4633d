//! Game resources (singleton state).

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::{Board, Position};
use crate::food::{Apple, Relocation};
use crate::snake::{Snake, StepOutcome};

/// Random source for apple placement and reset directions.
#[derive(Resource)]
pub struct GameRng {
    rng: StdRng,
    seed: u64,
}

impl GameRng {
    /// Seeds from `seed`, or from the thread RNG when none is given.
    pub fn new(seed: Option<u64>) -> Self {
        let seed = seed.unwrap_or_else(|| rand::rng().random());
        GameRng {
            rng: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn rng(&mut self) -> &mut StdRng {
        &mut self.rng
    }
}

/// What happened when the head reached the apple.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Feeding {
    Grew { length: usize, apple: Position },
    /// The snake filled the board; it was reset and the apple placed anew.
    BoardCleared { length: usize },
}

/// Main game state resource, owned by the loop for the whole run.
#[derive(Resource, Debug)]
pub struct GameState {
    pub board: Board,
    pub snake: Snake,
    pub apple: Apple,
}

impl GameState {
    pub fn new(board: Board, rng: &mut impl Rng) -> Self {
        let snake = Snake::new(&board, rng);
        let apple = Apple::new(&board, &snake.occupied_cells(), rng);
        GameState {
            board,
            snake,
            apple,
        }
    }

    pub fn advance_snake(&mut self, rng: &mut impl Rng) -> StepOutcome {
        self.snake.step(&self.board, rng)
    }

    /// Grows the snake and moves the apple if the head is on it.
    pub fn feed_snake(&mut self, rng: &mut impl Rng) -> Option<Feeding> {
        if !self.snake.head().collides_with(&self.apple.position()) {
            return None;
        }

        self.snake.grow();
        match self.apple.relocate(&self.board, &self.snake.occupied_cells(), rng) {
            Relocation::Placed(apple) => Some(Feeding::Grew {
                length: self.snake.length(),
                apple,
            }),
            Relocation::BoardFull => {
                let length = self.snake.length();
                self.snake.reset(&self.board, rng);
                // A valid board has at least two cells, so this always places.
                let placed = self.apple.relocate(&self.board, &self.snake.occupied_cells(), rng);
                debug_assert!(matches!(placed, Relocation::Placed(_)));
                Some(Feeding::BoardCleared { length })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Direction;

    fn board() -> Board {
        Board {
            width: 640,
            height: 480,
            cell_size: 20,
        }
    }

    #[test]
    fn test_seeded_rng_is_reproducible() {
        let mut first = GameRng::new(Some(99));
        let mut second = GameRng::new(Some(99));
        assert_eq!(first.seed(), 99);
        let a = GameState::new(board(), first.rng());
        let b = GameState::new(board(), second.rng());
        assert_eq!(a.apple.position(), b.apple.position());
    }

    #[test]
    fn test_new_game_apple_not_on_snake() {
        for seed in 0..50 {
            let mut rng = StdRng::seed_from_u64(seed);
            let state = GameState::new(board(), &mut rng);
            assert!(!state.snake.body().contains(&state.apple.position()));
        }
    }

    #[test]
    fn test_eating_apple_one_cell_ahead() {
        let mut rng = StdRng::seed_from_u64(11);
        let board = board();
        let mut state = GameState::new(board, &mut rng);
        assert_eq!(state.snake.direction(), Direction::Right);

        let ahead = Position::new(340, 240);
        state.apple.set_position(ahead);

        assert_eq!(state.advance_snake(&mut rng), StepOutcome::Moved);
        let feeding = state.feed_snake(&mut rng);

        assert_eq!(state.snake.length(), 2);
        let Some(Feeding::Grew { length, apple }) = feeding else {
            panic!("expected the snake to grow, got {feeding:?}");
        };
        assert_eq!(length, 2);
        assert_eq!(apple, state.apple.position());
        assert_ne!(apple, ahead);
        assert!(!state.snake.body().contains(&apple));

        // The next step keeps the tail, filling the new length.
        state.advance_snake(&mut rng);
        assert_eq!(state.snake.body().len(), 2);
        assert!(state.snake.body().contains(&ahead));
    }

    #[test]
    fn test_no_feeding_when_apple_elsewhere() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut state = GameState::new(board(), &mut rng);
        state.apple.set_position(Position::new(0, 0));
        state.advance_snake(&mut rng);
        assert_eq!(state.feed_snake(&mut rng), None);
        assert_eq!(state.snake.length(), 1);
    }

    #[test]
    fn test_filling_the_board_resets_snake() {
        let mut rng = StdRng::seed_from_u64(13);
        // Two cells: the snake takes one, the apple the other.
        let board = Board {
            width: 40,
            height: 20,
            cell_size: 20,
        };
        let mut state = GameState::new(board, &mut rng);
        assert_eq!(state.snake.head(), Position::new(20, 0));
        assert_eq!(state.apple.position(), Position::new(0, 0));

        // Wraps across the right edge onto the apple: length 2, apple on (20, 0).
        assert_eq!(state.advance_snake(&mut rng), StepOutcome::Moved);
        assert!(matches!(
            state.feed_snake(&mut rng),
            Some(Feeding::Grew { length: 2, .. })
        ));
        assert_eq!(state.apple.position(), Position::new(20, 0));

        // Growth tick keeps the tail, so both cells are covered when it eats.
        assert_eq!(state.advance_snake(&mut rng), StepOutcome::Moved);
        assert_eq!(
            state.feed_snake(&mut rng),
            Some(Feeding::BoardCleared { length: 3 })
        );

        assert_eq!(state.snake.length(), 1);
        assert_eq!(state.snake.body().len(), 1);
        assert_eq!(state.snake.head(), board.center());
        assert_eq!(state.apple.position(), Position::new(0, 0));
        assert!(!state.snake.body().contains(&state.apple.position()));
    }
}
