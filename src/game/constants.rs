//! Default board size, pacing, colors, and rendering layers.

// Board dimensions in pixels
pub const SCREEN_WIDTH: u32 = 640;
pub const SCREEN_HEIGHT: u32 = 480;
pub const CELL_SIZE: u32 = 20;

// Timing
pub const TICK_RATE: u32 = 10;

pub const WINDOW_TITLE: &str = "Змейка";

// Colors (sRGB bytes)
pub const BACKGROUND_COLOR: [u8; 3] = [0, 0, 0];
pub const BORDER_COLOR: [u8; 3] = [93, 216, 228];
pub const APPLE_COLOR: [u8; 3] = [255, 0, 0];
pub const SNAKE_COLOR: [u8; 3] = [0, 255, 0];

pub const BORDER_THICKNESS: f32 = 1.0;

// Z-index constants for rendering layers
pub const Z_ERASE: f32 = 0.5;
pub const Z_APPLE: f32 = 1.0;
pub const Z_SNAKE: f32 = 2.0;
pub const Z_BORDER_OFFSET: f32 = 0.1;
