use rand::{seq::SliceRandom, Rng};
use tracing::{debug, instrument, trace};

use crate::{
    direction::Direction, error::EngineError, mirror_board, rotate_board_clockwise,
    rotate_board_counter_clockwise, state::GameState, Board, Palette, Tile,
};

/// Most tiles admitted after a single move.
pub const SPAWN_COUNT: usize = 2;

type Transform = fn(Board) -> Board;

/// Forward and inverse reorientation per direction, indexed by `Direction as usize`. Every
/// direction becomes a slide towards the start of each row.
const ORIENTATIONS: [(Transform, Transform); 4] = [
    (rotate_board_counter_clockwise, rotate_board_clockwise),
    (rotate_board_clockwise, rotate_board_counter_clockwise),
    (mirror_board, mirror_board),
    (identity, identity),
];

fn identity(board: Board) -> Board {
    board
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Slide {
    pub merges: u32,
    pub changed: bool,
}

impl Slide {
    fn combine(self, other: Self) -> Self {
        Self {
            merges: self.merges + other.merges,
            changed: self.changed || other.changed,
        }
    }
}

/// Slides `row` towards index 0 in place.
///
/// Tiles are compacted in order and scanned pairwise: two neighbours of the same colour both
/// vanish and the scan resumes after them, so a tile takes part in at most one merge and the
/// survivors of a merge are never compared again in the same pass. `changed` is positional:
/// it is set iff the row differs from its contents on entry.
pub fn slide_row(row: &mut [Tile]) -> Slide {
    let mut slide = Slide::default();
    let mut write = 0;
    let mut pending: Option<(usize, Tile)> = None;

    for read in 0..row.len() {
        let tile = row[read];

        if tile.is_empty() {
            continue;
        }

        match pending.take() {
            Some((_, previous)) if previous == tile => {
                slide.merges += 1;
                slide.changed = true;
            }
            Some((from, previous)) => {
                // Writes only ever land on cells that have already been read.
                row[write] = previous;
                slide.changed |= from != write;
                write += 1;
                pending = Some((read, tile));
            }
            None => pending = Some((read, tile)),
        }
    }

    if let Some((from, previous)) = pending {
        row[write] = previous;
        slide.changed |= from != write;
        write += 1;
    }

    row[write..].fill(Tile::Empty);

    slide
}

fn slide_board(board: Board, direction: Direction) -> (Board, Slide) {
    let (forward, inverse) = ORIENTATIONS[direction as usize];

    let mut board = forward(board);

    let slide = board
        .rows_mut()
        .map(slide_row)
        .fold(Slide::default(), Slide::combine);

    (inverse(board), slide)
}

/// Returns the slid board and its merge count, or `None` if `direction` changes nothing.
pub fn try_move(board: &Board, direction: Direction) -> Option<(Board, u32)> {
    let (new_board, slide) = slide_board(board.clone(), direction);

    slide.changed.then_some((new_board, slide.merges))
}

/// [`try_move`] for every direction, indexed by `Direction as usize`.
pub fn try_all_moves(board: &Board) -> [Option<(Board, u32)>; 4] {
    Direction::ALL.map(|direction| try_move(board, direction))
}

/// Fills a fresh `size`×`size` board with random colours.
#[instrument(level = "debug", skip(palette, rng))]
pub fn create_board(
    size: usize,
    palette: &Palette,
    rng: &mut impl Rng,
) -> Result<Board, EngineError> {
    let mut board = Board::empty(size)?;

    for row in board.rows_mut() {
        for cell in row {
            *cell = palette.random_tile(rng);
        }
    }

    Ok(board)
}

/// Colours up to [`SPAWN_COUNT`] distinct empty cells chosen uniformly at random.
#[instrument(level = "trace", skip_all)]
pub fn spawn(mut board: Board, palette: &Palette, rng: &mut impl Rng) -> Board {
    let empty: Vec<_> = board.empty_cells().collect();

    let chosen: Vec<_> = empty.choose_multiple(rng, SPAWN_COUNT).copied().collect();

    for (row, col) in chosen {
        let tile = palette.random_tile(rng);
        board.set(row, col, tile);

        trace!(row, col, ?tile, "spawned tile");
    }

    board
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    pub state: GameState,
    pub merges: u32,
    pub changed: bool,
}

/// Applies one move: slide and merge, score the merges, then spawn if anything changed.
#[instrument(level = "debug", skip(state, palette, rng), fields(score = state.score()))]
pub fn apply_move(
    state: &GameState,
    direction: Direction,
    palette: &Palette,
    rng: &mut impl Rng,
) -> MoveOutcome {
    let (board, slide) = slide_board(state.board().clone(), direction);

    if !slide.changed {
        debug!("move changed nothing");

        return MoveOutcome {
            state: state.clone(),
            merges: 0,
            changed: false,
        };
    }

    let score = state.score() + slide.merges;
    let board = spawn(board, palette, rng);

    debug!(merges = slide.merges, score, "applied move");

    MoveOutcome {
        state: GameState::with_score(board, score),
        merges: slide.merges,
        changed: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Color::*;

    const E: Tile = Tile::Empty;

    fn t(color: crate::Color) -> Tile {
        color.into()
    }

    fn slid(mut row: Vec<Tile>) -> (Vec<Tile>, Slide) {
        let slide = slide_row(&mut row);
        (row, slide)
    }

    #[test]
    fn single_pair_vanishes() {
        let (row, slide) = slid(vec![t(Red), t(Red), t(Blue), E]);

        assert_eq!(row, [t(Blue), E, E, E]);
        assert_eq!(slide, Slide { merges: 1, changed: true });
    }

    #[test]
    fn merges_do_not_cascade() {
        let (row, slide) = slid(vec![t(Red), t(Red), t(Red), E]);

        assert_eq!(row, [t(Red), E, E, E]);
        assert_eq!(slide.merges, 1);
    }

    #[test]
    fn survivors_brought_together_stay_apart() {
        let (row, slide) = slid(vec![t(Red), t(Blue), t(Blue), t(Red)]);

        assert_eq!(row, [t(Red), t(Red), E, E]);
        assert_eq!(slide.merges, 1);
    }

    #[test]
    fn gaps_are_closed_before_comparing() {
        let (row, slide) = slid(vec![t(Green), E, E, t(Green)]);

        assert_eq!(row, [E, E, E, E]);
        assert_eq!(slide.merges, 1);
    }

    #[test]
    fn two_pairs_in_one_row() {
        let (row, slide) = slid(vec![t(Cyan), t(Cyan), t(Yellow), t(Yellow)]);

        assert_eq!(row, [E; 4]);
        assert_eq!(slide.merges, 2);
    }

    #[test]
    fn compacted_row_is_unchanged() {
        let (row, slide) = slid(vec![t(Red), t(Blue), t(Red), E]);

        assert_eq!(row, [t(Red), t(Blue), t(Red), E]);
        assert_eq!(slide, Slide::default());
    }

    #[test]
    fn sliding_without_merging_is_a_change() {
        let (row, slide) = slid(vec![E, t(Red), E, t(Blue)]);

        assert_eq!(row, [t(Red), t(Blue), E, E]);
        assert_eq!(slide, Slide { merges: 0, changed: true });
    }

    #[test]
    fn empty_row_is_unchanged() {
        let (row, slide) = slid(vec![E; 4]);

        assert_eq!(row, [E; 4]);
        assert!(!slide.changed);
    }

    #[test]
    fn orientations_undo_themselves() {
        let board = Board::from_rows([
            [t(Red), t(Green), E],
            [t(Blue), E, t(Yellow)],
            [E, t(Magenta), t(Cyan)],
        ])
        .unwrap();

        for (forward, inverse) in ORIENTATIONS {
            assert_eq!(inverse(forward(board.clone())), board);
        }
    }
}
