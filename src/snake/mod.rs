//! Snake plugin - handles snake movement, input, self-collision, and growth.

use bevy::prelude::*;
use rand::Rng;
use std::collections::{HashSet, VecDeque};

use crate::game::{
    Board, Direction, GameRng, GameSet, GameState, Position, ResetReason, SnakeReset,
};

/// Plugin for snake-related systems.
pub struct SnakePlugin;

impl Plugin for SnakePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, snake_movement_input.in_set(GameSet::Input))
            .add_systems(Update, snake_movement.in_set(GameSet::Movement));
    }
}

/// Result of a single [`Snake::step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    /// The head ran into the body; the snake has been reset.
    Collided { length: usize },
}

/// The player's snake: body cells head first, plus steering state.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Position>,
    length: usize,
    direction: Direction,
    pending_direction: Option<Direction>,
    vacated: Option<Position>,
}

impl Snake {
    /// A fresh snake in the middle of the board, heading right.
    pub fn new(board: &Board, rng: &mut impl Rng) -> Self {
        let mut snake = Snake {
            body: VecDeque::new(),
            length: 1,
            direction: Direction::Right,
            pending_direction: None,
            vacated: None,
        };
        snake.reset(board, rng);
        snake.direction = Direction::Right;
        snake
    }

    /// Shrinks back to a single centre cell facing a random direction.
    pub fn reset(&mut self, board: &Board, rng: &mut impl Rng) {
        self.body.clear();
        self.body.push_back(board.center());
        self.length = 1;
        self.direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
        self.pending_direction = None;
        self.vacated = None;
    }

    /// Queues a turn for the next step. Reversing onto the neck is ignored.
    pub fn set_pending_direction(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.pending_direction = Some(direction);
        true
    }

    /// Advances the head one cell, trimming the tail unless the snake is growing.
    pub fn step(&mut self, board: &Board, rng: &mut impl Rng) -> StepOutcome {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = board.step(self.head(), self.direction);

        // The segment right behind the head is vacated this tick, so only
        // cells from the third segment on can be hit.
        if self
            .body
            .iter()
            .skip(2)
            .any(|segment| segment.collides_with(&new_head))
        {
            let length = self.length;
            self.reset(board, rng);
            return StepOutcome::Collided { length };
        }

        self.body.push_front(new_head);
        self.vacated = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
        StepOutcome::Moved
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    pub fn head(&self) -> Position {
        // reset() always leaves one cell and step() never pops the head
        self.body[0]
    }

    /// Occupied cells, head first.
    pub fn body(&self) -> &VecDeque<Position> {
        &self.body
    }

    /// Occupied cells as a set, for placing the apple.
    pub fn occupied_cells(&self) -> HashSet<Position> {
        self.body.iter().copied().collect()
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    /// Tail cell dropped by the last step, to be erased by the renderer.
    pub fn vacated(&self) -> Option<Position> {
        self.vacated
    }
}

/// System to read keyboard input and queue direction changes.
fn snake_movement_input(
    keyboard_input: Res<ButtonInput<KeyCode>>,
    mut game_state: ResMut<GameState>,
) {
    if let Some(direction) = Direction::from_input(&keyboard_input)
        && !game_state.snake.set_pending_direction(direction)
    {
        debug!("Ignoring reversal to {:?}", direction);
    }
}

/// System to advance the snake by one cell each tick.
fn snake_movement(
    mut game_state: ResMut<GameState>,
    mut rng: ResMut<GameRng>,
    mut reset_writer: MessageWriter<SnakeReset>,
) {
    if let StepOutcome::Collided { length } = game_state.advance_snake(rng.rng()) {
        reset_writer.write(SnakeReset {
            reason: ResetReason::SelfCollision,
            length,
        });
    }
}
