use crate::{direction::Direction, logic, Board};

pub mod greedy;
pub mod random;

pub use greedy::GreedyAi;
pub use random::RandomAi;

/// Picks moves for unattended play. `None` means no direction changes the board.
pub trait Ai {
    fn get_next_move(&mut self, board: &Board) -> Option<Direction>;
}

fn get_all_moves(board: &Board) -> impl Iterator<Item = (Board, u32, Direction)> {
    logic::try_all_moves(board)
        .into_iter()
        .zip(Direction::ALL)
        .filter_map(|(moved, direction)| moved.map(|(board, merges)| (board, merges, direction)))
}
