use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{board::ColorId, error::BoardError, Board, Tile};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Names for the colour ids of [`Palette::standard`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Color {
    Red = 0,
    Green = 1,
    Blue = 2,
    Yellow = 3,
    Magenta = 4,
    Cyan = 5,
}

impl Color {
    pub const ALL: [Self; 6] = [
        Self::Red,
        Self::Green,
        Self::Blue,
        Self::Yellow,
        Self::Magenta,
        Self::Cyan,
    ];

    pub const fn id(self) -> ColorId {
        ColorId(self as u8)
    }

    pub const fn rgb(self) -> Rgb {
        match self {
            Self::Red => Rgb(255, 0, 0),
            Self::Green => Rgb(0, 255, 0),
            Self::Blue => Rgb(0, 0, 255),
            Self::Yellow => Rgb(255, 255, 0),
            Self::Magenta => Rgb(255, 0, 255),
            Self::Cyan => Rgb(0, 255, 255),
        }
    }
}

impl From<Color> for ColorId {
    fn from(color: Color) -> Self {
        color.id()
    }
}

impl From<Color> for Tile {
    fn from(color: Color) -> Self {
        Self::Colored(color.id())
    }
}

/// Closed, non-empty set of colours tiles are drawn from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Rgb>", into = "Vec<Rgb>")]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self, BoardError> {
        match colors.len() {
            0 => Err(BoardError::EmptyPalette),
            len if len > usize::from(u8::MAX) + 1 => Err(BoardError::PaletteTooLarge { len }),
            _ => Ok(Self { colors }),
        }
    }

    pub fn standard() -> Self {
        Self {
            colors: Color::ALL.map(Color::rgb).to_vec(),
        }
    }

    pub fn color_count(&self) -> usize {
        self.colors.len()
    }

    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    pub fn rgb(&self, color: ColorId) -> Option<Rgb> {
        self.colors.get(color.index()).copied()
    }

    pub fn random_color(&self, rng: &mut impl Rng) -> ColorId {
        // Construction caps the palette at 256 entries, so every index fits in a u8.
        ColorId(rng.gen_range(0..self.colors.len()) as u8)
    }

    pub fn random_tile(&self, rng: &mut impl Rng) -> Tile {
        Tile::Colored(self.random_color(rng))
    }

    /// Checks that every coloured tile on `board` names a colour of this palette.
    pub fn validate(&self, board: &Board) -> Result<(), BoardError> {
        let unknown = board
            .cells()
            .iter()
            .filter_map(|tile| tile.color())
            .find(|color| color.index() >= self.colors.len());

        match unknown {
            Some(color) => Err(BoardError::UnknownColor {
                color: color.0,
                len: self.colors.len(),
            }),
            None => Ok(()),
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}

impl TryFrom<Vec<Rgb>> for Palette {
    type Error = BoardError;

    fn try_from(colors: Vec<Rgb>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

impl From<Palette> for Vec<Rgb> {
    fn from(palette: Palette) -> Self {
        palette.colors
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;

    #[test]
    fn empty_palette_is_rejected() {
        assert_eq!(Palette::new(Vec::new()), Err(BoardError::EmptyPalette));
    }

    #[test]
    fn oversized_palette_is_rejected() {
        let colors = vec![Rgb(0, 0, 0); 257];

        assert_eq!(
            Palette::new(colors),
            Err(BoardError::PaletteTooLarge { len: 257 })
        );
    }

    #[test]
    fn standard_palette_matches_named_colors() {
        let palette = Palette::standard();

        assert_eq!(palette.color_count(), Color::ALL.len());

        for color in Color::ALL {
            assert_eq!(palette.rgb(color.id()), Some(color.rgb()));
        }
    }

    #[test]
    fn random_colors_stay_in_palette() {
        let palette = Palette::new(vec![Rgb(1, 2, 3), Rgb(4, 5, 6)]).unwrap();
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..100 {
            assert!(palette.random_color(&mut rng).index() < 2);
        }
    }

    #[test]
    fn validate_reports_foreign_colors() {
        let palette = Palette::new(vec![Rgb(1, 2, 3)]).unwrap();
        let board = Board::from_rows([
            [Tile::Colored(ColorId(0)), Tile::Colored(ColorId(3))],
            [Tile::Empty, Tile::Empty],
        ])
        .unwrap();

        assert_eq!(
            palette.validate(&board),
            Err(BoardError::UnknownColor { color: 3, len: 1 })
        );
    }
}
