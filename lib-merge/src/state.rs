use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{info, instrument};

use crate::{
    config::GameConfig,
    direction::Direction,
    error::EngineError,
    logic::{self, MoveOutcome},
    Board, Palette,
};

/// Board and score of one session.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct GameState {
    board: Board,
    score: u32,
}

impl GameState {
    pub const fn new(board: Board) -> Self {
        Self { board, score: 0 }
    }

    pub const fn with_score(board: Board, score: u32) -> Self {
        Self { board, score }
    }

    pub const fn board(&self) -> &Board {
        &self.board
    }

    pub const fn score(&self) -> u32 {
        self.score
    }
}

/// A session: the current state plus the palette and generator every move draws from.
#[derive(Clone, Debug)]
pub struct Game<R> {
    state: GameState,
    palette: Palette,
    rng: R,
}

impl<R> Game<R>
where
    R: Rng,
{
    #[instrument(level = "debug", skip(palette, rng))]
    pub fn new(size: usize, palette: Palette, mut rng: R) -> Result<Self, EngineError> {
        let board = logic::create_board(size, &palette, &mut rng)?;

        Ok(Self {
            state: GameState::new(board),
            palette,
            rng,
        })
    }

    pub fn from_config(config: &GameConfig, rng: R) -> Result<Self, EngineError> {
        Self::new(config.size, config.palette.clone(), rng)
    }

    /// Plays one move, returning the merge count and whether the board changed.
    pub fn play(&mut self, direction: Direction) -> (u32, bool) {
        let MoveOutcome {
            state,
            merges,
            changed,
        } = logic::apply_move(&self.state, direction, &self.palette, &mut self.rng);

        self.state = state;

        (merges, changed)
    }

    /// Swaps in a previously captured state of the same size and palette.
    pub fn restore(&mut self, state: GameState) -> Result<(), EngineError> {
        let expected = self.state.board.size();
        let found = state.board.size();

        if found != expected {
            return Err(EngineError::SizeMismatch { expected, found });
        }

        self.palette.validate(&state.board)?;

        info!(score = state.score, "restored game state");
        self.state = state;

        Ok(())
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        &self.state.board
    }

    pub fn score(&self) -> u32 {
        self.state.score
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }
}

impl Game<ChaCha8Rng> {
    pub fn from_seed(config: &GameConfig, seed: u64) -> Result<Self, EngineError> {
        Self::from_config(config, ChaCha8Rng::seed_from_u64(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BoardError, Color, ColorId, Tile};

    #[test]
    fn new_game_is_full_and_scoreless() {
        let game = Game::from_seed(&GameConfig::default(), 1).unwrap();

        assert_eq!(game.board().size(), 4);
        assert!(game.board().is_full());
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn zero_size_is_rejected() {
        let config = GameConfig {
            size: 0,
            ..GameConfig::default()
        };

        assert_eq!(
            Game::from_seed(&config, 1).unwrap_err(),
            EngineError::Board(BoardError::ZeroSize)
        );
    }

    #[test]
    fn oversized_config_is_rejected() {
        let size = 1usize << (usize::BITS / 2);
        let config = GameConfig::from_toml(&format!("size = {size}")).unwrap();

        assert_eq!(
            Game::from_seed(&config, 1).unwrap_err(),
            EngineError::Board(BoardError::TooLarge { size })
        );
    }

    #[test]
    fn restore_rejects_other_sizes() {
        let mut game = Game::from_seed(&GameConfig::default(), 1).unwrap();
        let state = GameState::new(Board::empty(3).unwrap());

        assert_eq!(
            game.restore(state),
            Err(EngineError::SizeMismatch {
                expected: 4,
                found: 3
            })
        );
    }

    #[test]
    fn restore_rejects_foreign_colors() {
        let mut game = Game::from_seed(&GameConfig::default(), 1).unwrap();
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, Tile::Colored(ColorId(9)));

        assert!(matches!(
            game.restore(GameState::new(board)),
            Err(EngineError::Board(BoardError::UnknownColor { color: 9, .. }))
        ));
    }

    #[test]
    fn restored_state_is_played() {
        let mut game = Game::from_seed(&GameConfig::default(), 1).unwrap();
        let mut board = Board::empty(4).unwrap();
        board.set(0, 0, Color::Red.into());
        board.set(0, 3, Color::Red.into());
        game.restore(GameState::with_score(board, 5)).unwrap();

        assert_eq!(game.play(Direction::Left), (1, true));
        assert_eq!(game.score(), 6);
    }
}
