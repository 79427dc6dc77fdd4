mod board;
mod error;

pub mod metrics;
pub mod palette;

pub use board::{Board, ColorId, Tile};
pub use error::BoardError;
pub use palette::{Color, Palette, Rgb};

/// Reverses every row.
pub fn mirror_board(board: Board) -> Board {
    let size = board.size();

    Board::from_fn(size, |row, col| board.row(row)[size - 1 - col])
}

/// Rotates a quarter turn clockwise: the left column becomes the top row, read bottom to top.
pub fn rotate_board_clockwise(board: Board) -> Board {
    let size = board.size();

    Board::from_fn(size, |row, col| board.row(size - 1 - col)[row])
}

/// Rotates a quarter turn counter-clockwise: the left column becomes the bottom row, read top
/// to bottom.
pub fn rotate_board_counter_clockwise(board: Board) -> Board {
    let size = board.size();

    Board::from_fn(size, |row, col| board.row(col)[size - 1 - row])
}
