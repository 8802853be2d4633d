//! Game events (messages).

use bevy::prelude::*;

use super::Position;

/// Why the snake was sent back to a single centre cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResetReason {
    SelfCollision,
    /// Every cell was covered, so there was nowhere left for the apple.
    BoardFull,
}

/// Message triggered when the snake resets.
#[derive(Message, Debug)]
pub struct SnakeReset {
    pub reason: ResetReason,
    /// Target length the snake had reached before the reset.
    pub length: usize,
}

/// Message triggered when the apple is eaten.
#[derive(Message, Debug)]
pub struct AppleEaten {
    pub position: Position,
    pub length: usize,
    /// Where the apple was moved to.
    pub next_apple: Position,
}
