use crate::{rotate_board_clockwise, Board, Tile};

pub fn empty_count(board: &Board) -> u32 {
    board.empty_cells().count() as u32
}

/// Counts neighbouring tiles of the same colour once gaps are closed, i.e. the pairs a slide
/// along this line could bring together.
pub fn row_pair_count(row: &[Tile]) -> u32 {
    let mut tiles = row.iter().filter(|tile| !tile.is_empty());

    let Some(mut previous) = tiles.next() else {
        return 0;
    };

    tiles.fold(0, |count, tile| {
        let count = if tile == previous { count + 1 } else { count };
        previous = tile;

        count
    })
}

/// Pair count over every row and every column.
pub fn pair_count(board: &Board) -> u32 {
    let row_pairs: u32 = board.rows().map(row_pair_count).sum();

    let column_pairs: u32 = rotate_board_clockwise(board.clone())
        .rows()
        .map(row_pair_count)
        .sum();

    row_pairs + column_pairs
}
