//! Grid geometry shared by the snake, the apple and the renderer.

use bevy::prelude::*;

/// Pixel position of a grid cell's top-left corner.
///
/// Both coordinates are multiples of the cell size. The origin is the
/// top-left corner of the board and `y` grows downwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// Check if this position collides with another position.
    pub fn collides_with(&self, other: &Position) -> bool {
        self.x == other.x && self.y == other.y
    }
}

/// Direction enum for snake movement.
#[derive(PartialEq, Eq, Copy, Clone, Debug)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    /// Returns the opposite direction.
    pub fn opposite(&self) -> Self {
        match self {
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
        }
    }

    /// Unit step in grid cells, screen orientation (up is negative `y`).
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
        }
    }

    /// Reads the key-down events of this frame and returns the requested direction.
    pub fn from_input(keyboard_input: &ButtonInput<KeyCode>) -> Option<Direction> {
        if keyboard_input.just_pressed(KeyCode::ArrowLeft)
            || keyboard_input.just_pressed(KeyCode::KeyA)
        {
            Some(Direction::Left)
        } else if keyboard_input.just_pressed(KeyCode::ArrowRight)
            || keyboard_input.just_pressed(KeyCode::KeyD)
        {
            Some(Direction::Right)
        } else if keyboard_input.just_pressed(KeyCode::ArrowUp)
            || keyboard_input.just_pressed(KeyCode::KeyW)
        {
            Some(Direction::Up)
        } else if keyboard_input.just_pressed(KeyCode::ArrowDown)
            || keyboard_input.just_pressed(KeyCode::KeyS)
        {
            Some(Direction::Down)
        } else {
            None
        }
    }
}

/// Playable area in pixels, an exact multiple of the cell size on both axes.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Board {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
}

impl Board {
    pub fn columns(&self) -> u32 {
        self.width / self.cell_size
    }

    pub fn rows(&self) -> u32 {
        self.height / self.cell_size
    }

    pub fn total_cells(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Grid-aligned cell nearest the middle of the board.
    pub fn center(&self) -> Position {
        self.cell(self.columns() / 2, self.rows() / 2)
    }

    /// Position of the cell at `column`, `row`.
    pub fn cell(&self, column: u32, row: u32) -> Position {
        Position::new(
            (column * self.cell_size) as i32,
            (row * self.cell_size) as i32,
        )
    }

    /// Every cell of the board, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.columns()).map(move |col| self.cell(col, row)))
    }

    /// Moves `from` one cell towards `direction`, wrapping each axis on its own.
    ///
    /// Leaving past the low edge lands on the last column/row
    /// (`extent - cell_size`); reaching the extent lands on 0.
    pub fn step(&self, from: Position, direction: Direction) -> Position {
        let (dx, dy) = direction.delta();
        let cell = self.cell_size as i32;
        Position::new(
            wrap_axis(from.x + dx * cell, self.width as i32, cell),
            wrap_axis(from.y + dy * cell, self.height as i32, cell),
        )
    }
}

fn wrap_axis(value: i32, extent: i32, cell: i32) -> i32 {
    if value < 0 {
        extent - cell
    } else if value >= extent {
        0
    } else {
        value
    }
}
