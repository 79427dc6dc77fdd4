use derive_more::{Display, Error};

/// Invalid board or palette shapes, rejected at construction.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum BoardError {
    #[display("board must have at least one row")]
    ZeroSize,
    #[display("row {row} has {len} cells but the board has {expected} rows")]
    NotSquare {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[display("a board of side {size} has more cells than fit in memory")]
    TooLarge { size: usize },
    #[display("palette must contain at least one colour")]
    EmptyPalette,
    #[display("palette has {len} colours, at most 256 are supported")]
    PaletteTooLarge { len: usize },
    #[display("colour {color} is not in a palette of {len} colours")]
    UnknownColor { color: u8, len: usize },
}
