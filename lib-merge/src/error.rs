use derive_more::{Display, Error, From};

use crate::BoardError;

#[derive(Clone, Debug, PartialEq, Eq, Display, Error, From)]
pub enum EngineError {
    #[display("invalid board: {_0}")]
    #[from]
    Board(#[error(source)] BoardError),
    #[display("board is {found}x{found}, this game plays on {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },
    #[display("unknown direction {token:?}, expected up, down, left or right")]
    InvalidDirection { token: String },
    #[display("invalid config: {message}")]
    Config { message: String },
}

impl From<toml::de::Error> for EngineError {
    fn from(err: toml::de::Error) -> Self {
        Self::Config {
            message: err.to_string(),
        }
    }
}
