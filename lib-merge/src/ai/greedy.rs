use crate::{direction::Direction, metrics, Board};

use super::Ai;

/// Takes the move with the most merges, preferring boards that leave more pairs to merge next.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyAi;

impl Ai for GreedyAi {
    fn get_next_move(&mut self, board: &Board) -> Option<Direction> {
        super::get_all_moves(board)
            .map(|(new_board, merges, direction)| {
                ((merges, metrics::pair_count(&new_board)), direction)
            })
            .fold(None, |best, (key, direction)| match best {
                Some((best_key, _)) if best_key >= key => best,
                _ => Some((key, direction)),
            })
            .map(|(_, direction)| direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color::*, Tile};

    const E: Tile = Tile::Empty;

    #[test]
    fn prefers_merging_move() {
        let (r, b) = (Tile::from(Red), Tile::from(Blue));
        // Columns hold no pairs, the top row holds one.
        let board = Board::from_rows([[r, r, E], [b, E, E], [E, E, E]]).unwrap();

        let direction = GreedyAi.get_next_move(&board).unwrap();

        assert!(matches!(direction, Direction::Left | Direction::Right));
    }

    #[test]
    fn ties_go_to_earlier_direction() {
        let mut board = Board::empty(3).unwrap();
        board.set(1, 1, Green.into());

        assert_eq!(GreedyAi.get_next_move(&board), Some(Direction::Up));
    }
}
