use std::{fmt, str::FromStr};

use crate::error::EngineError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Right, Self::Left];

    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Right => "right",
            Self::Left => "left",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::iter()
            .find(|direction| direction.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| EngineError::InvalidDirection {
                token: s.to_owned(),
            })
    }
}

impl TryFrom<u8> for Direction {
    type Error = EngineError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| EngineError::InvalidDirection {
                token: value.to_string(),
            })
    }
}
