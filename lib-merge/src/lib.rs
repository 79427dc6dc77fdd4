pub use core_merge::*;

pub mod ai;
pub mod config;
pub mod logic;
pub mod state;

mod direction;
mod error;

pub use config::GameConfig;
pub use direction::Direction;
pub use error::EngineError;
pub use logic::{apply_move, create_board, spawn, try_all_moves, try_move, MoveOutcome};
pub use state::{Game, GameState};
