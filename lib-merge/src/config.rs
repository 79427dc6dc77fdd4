use serde::{Deserialize, Serialize};

use crate::{error::EngineError, BoardError, Palette};

pub const DEFAULT_SIZE: usize = 4;

/// Board side length and palette for a session.
///
/// Read from TOML, every key optional:
///
/// ```toml
/// size = 5
/// palette = [[255, 0, 0], [0, 255, 0], [0, 0, 255]]
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GameConfig {
    pub size: usize,
    pub palette: Palette,
}

impl GameConfig {
    pub fn from_toml(source: &str) -> Result<Self, EngineError> {
        let config: Self = toml::from_str(source)?;

        if config.size == 0 {
            return Err(BoardError::ZeroSize.into());
        }

        Ok(config)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            palette: Palette::standard(),
        }
    }
}
