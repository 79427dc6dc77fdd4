use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::{Parser, ValueEnum};
use lib_merge::GameConfig;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Arrow keys slide the board, `q` quits.
    Interactive,
    /// Plays uniformly random moves that change the board.
    Random,
    /// Plays the move with the most merges.
    Greedy,
}

/// Slide and merge coloured tiles in the terminal.
#[derive(Debug, Parser)]
#[command(name = "color-merge", version, about)]
pub struct Cli {
    /// TOML file with `size` and `palette` keys.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Board side length, overrides the config file.
    #[arg(short, long)]
    pub size: Option<usize>,

    /// Seed for tile colours and placement. Random when omitted.
    #[arg(long)]
    pub seed: Option<u64>,

    #[arg(short, long, value_enum, default_value_t = Mode::Interactive)]
    pub mode: Mode,

    /// Move limit for the automatic modes.
    #[arg(short = 'n', long, default_value_t = 1000)]
    pub moves: u32,
}

impl Cli {
    pub fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let source = fs::read_to_string(path)
                    .with_context(|| format!("reading config {}", path.display()))?;

                GameConfig::from_toml(&source)
                    .with_context(|| format!("parsing config {}", path.display()))?
            }
            None => GameConfig::default(),
        };

        if let Some(size) = self.size {
            anyhow::ensure!(size > 0, "board size must be at least 1");
            config.size = size;
        }

        Ok(config)
    }
}
