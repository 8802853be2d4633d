//! Core game module containing shared geometry, configuration, state, events, and constants.

mod components;
mod config;
mod constants;
mod events;
mod resources;

pub use components::*;
pub use config::*;
pub use constants::*;
pub use events::*;
pub use resources::*;

use bevy::prelude::*;

/// Ordering of one frame: steer, then (on tick frames) move and eat, then draw.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameSet {
    Input,
    Movement,
    Feeding,
    Render,
}
