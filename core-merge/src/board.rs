use std::fmt;

use crate::error::BoardError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorId(pub u8);

impl ColorId {
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Contents of a single cell.
///
/// Merge comparisons go through the derived equality, so two tiles are equal exactly when both
/// are empty or both carry the same colour id.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Tile {
    #[default]
    Empty,
    Colored(ColorId),
}

impl Tile {
    pub const fn is_empty(self) -> bool {
        matches!(self, Self::Empty)
    }

    pub const fn color(self) -> Option<ColorId> {
        match self {
            Self::Empty => None,
            Self::Colored(color) => Some(color),
        }
    }
}

impl From<ColorId> for Tile {
    fn from(color: ColorId) -> Self {
        Self::Colored(color)
    }
}

/// Square grid of tiles stored row-major.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Tile>,
}

impl Board {
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        if size == 0 {
            return Err(BoardError::ZeroSize);
        }

        let cell_count = size
            .checked_mul(size)
            .ok_or(BoardError::TooLarge { size })?;

        Ok(Self {
            size,
            cells: vec![Tile::Empty; cell_count],
        })
    }

    /// Builds a board from rows, rejecting anything that is not N×N.
    pub fn from_rows<R>(rows: impl IntoIterator<Item = R>) -> Result<Self, BoardError>
    where
        R: IntoIterator<Item = Tile>,
    {
        let rows: Vec<Vec<Tile>> = rows.into_iter().map(|row| row.into_iter().collect()).collect();
        let size = rows.len();

        if size == 0 {
            return Err(BoardError::ZeroSize);
        }

        if let Some((row, cells)) = rows.iter().enumerate().find(|(_, cells)| cells.len() != size) {
            return Err(BoardError::NotSquare {
                row,
                len: cells.len(),
                expected: size,
            });
        }

        Ok(Self {
            size,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    pub(crate) fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> Tile) -> Self {
        let cells = (0..size * size).map(|i| f(i / size, i % size)).collect();

        Self { size, cells }
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<Tile> {
        (row < self.size && col < self.size).then(|| self.cells[row * self.size + col])
    }

    /// Returns the previous tile, or `None` when the position is off the board.
    pub fn set(&mut self, row: usize, col: usize, tile: Tile) -> Option<Tile> {
        if row < self.size && col < self.size {
            let cell = &mut self.cells[row * self.size + col];
            Some(std::mem::replace(cell, tile))
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if `row` is not less than [`Board::size`].
    pub fn row(&self, row: usize) -> &[Tile] {
        &self.cells[row * self.size..(row + 1) * self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks_exact(self.size)
    }

    pub fn rows_mut(&mut self) -> impl Iterator<Item = &mut [Tile]> {
        self.cells.chunks_exact_mut(self.size)
    }

    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Positions of empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(i, _)| (i / self.size, i % self.size))
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|tile| !tile.is_empty())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for (i, tile) in row.iter().enumerate() {
                if i != 0 {
                    f.write_str(" ")?;
                }

                match tile {
                    Tile::Empty => f.write_str(".")?,
                    Tile::Colored(color) => write!(f, "{}", color.0)?,
                }
            }

            f.write_str("\n")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const R: Tile = Tile::Colored(ColorId(0));
    const B: Tile = Tile::Colored(ColorId(2));
    const E: Tile = Tile::Empty;

    #[test]
    fn from_rows_rejects_ragged_board() {
        let err = Board::from_rows([vec![R, B], vec![R]]).unwrap_err();

        assert_eq!(
            err,
            BoardError::NotSquare {
                row: 1,
                len: 1,
                expected: 2
            }
        );
    }

    #[test]
    fn from_rows_rejects_rectangular_board() {
        let err = Board::from_rows([[R, B, E], [R, B, E]]).unwrap_err();

        assert!(matches!(err, BoardError::NotSquare { row: 0, .. }));
    }

    #[test]
    fn zero_size_is_rejected() {
        assert_eq!(Board::empty(0).unwrap_err(), BoardError::ZeroSize);
        assert_eq!(
            Board::from_rows(Vec::<Vec<Tile>>::new()).unwrap_err(),
            BoardError::ZeroSize
        );
    }

    #[test]
    fn oversized_board_is_rejected() {
        let size = usize::MAX / 2;

        assert_eq!(Board::empty(size).unwrap_err(), BoardError::TooLarge { size });
    }

    #[test]
    fn get_and_set_are_bounds_checked() {
        let mut board = Board::empty(3).unwrap();

        assert_eq!(board.set(1, 2, R), Some(E));
        assert_eq!(board.get(1, 2), Some(R));
        assert_eq!(board.set(3, 0, R), None);
        assert_eq!(board.get(0, 3), None);
    }

    #[test]
    #[should_panic]
    fn row_past_the_edge_panics() {
        let board = Board::empty(2).unwrap();

        board.row(2);
    }

    #[test]
    fn empty_cells_are_row_major() {
        let board = Board::from_rows([[R, E], [E, B]]).unwrap();

        assert_eq!(board.empty_cells().collect::<Vec<_>>(), [(0, 1), (1, 0)]);
        assert!(!board.is_full());
    }

    #[test]
    fn display_uses_color_ids() {
        let board = Board::from_rows([[R, E], [E, B]]).unwrap();

        assert_eq!(board.to_string(), "0 .\n. 2\n");
    }
}
