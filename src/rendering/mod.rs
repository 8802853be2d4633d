//! Rendering plugin - draws the apple and the snake as bordered grid cells.

use bevy::prelude::*;
use bevy_vector_shapes::prelude::*;

use crate::game::{
    BORDER_THICKNESS, Board, GameConfig, GameSet, GameState, Position, Z_APPLE, Z_BORDER_OFFSET,
    Z_ERASE, Z_SNAKE,
};

/// Plugin for rendering.
pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, draw_board.in_set(GameSet::Render));
    }
}

/// World-space centre of a cell, with the board centred on the camera.
pub fn cell_translation(board: &Board, position: Position) -> Vec2 {
    let half_cell = board.cell_size as f32 / 2.0;
    Vec2::new(
        position.x as f32 + half_cell - board.width as f32 / 2.0,
        board.height as f32 / 2.0 - position.y as f32 - half_cell,
    )
}

/// Draws one filled cell with a thin outline.
pub fn draw_cell(
    painter: &mut ShapePainter,
    board: &Board,
    position: Position,
    z: f32,
    fill: Color,
    border: Color,
) {
    let size = Vec2::splat(board.cell_size as f32);
    let center = cell_translation(board, position);

    painter.transform.translation = center.extend(z);
    painter.hollow = false;
    painter.color = fill;
    painter.rect(size);

    painter.transform.translation = center.extend(z + Z_BORDER_OFFSET);
    painter.hollow = true;
    painter.thickness = BORDER_THICKNESS;
    painter.color = border;
    painter.rect(size);
}

/// System to draw the apple, erase the vacated tail cell and draw the snake.
fn draw_board(mut painter: ShapePainter, game_state: Res<GameState>, config: Res<GameConfig>) {
    let board = &game_state.board;
    let palette = &config.palette;
    let border = palette.border.color();

    draw_cell(
        &mut painter,
        board,
        game_state.apple.position(),
        Z_APPLE,
        palette.apple.color(),
        border,
    );

    if let Some(vacated) = game_state.snake.vacated() {
        let background = palette.background.color();
        draw_cell(&mut painter, board, vacated, Z_ERASE, background, background);
    }

    let snake_color = palette.snake.color();
    for &segment in game_state.snake.body() {
        draw_cell(&mut painter, board, segment, Z_SNAKE, snake_color, border);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_translation_corners() {
        let board = Board {
            width: 640,
            height: 480,
            cell_size: 20,
        };
        assert_eq!(
            cell_translation(&board, Position::new(0, 0)),
            Vec2::new(-310.0, 230.0)
        );
        assert_eq!(
            cell_translation(&board, Position::new(620, 460)),
            Vec2::new(310.0, -230.0)
        );
        assert_eq!(cell_translation(&board, board.center()), Vec2::new(10.0, -10.0));
    }
}
