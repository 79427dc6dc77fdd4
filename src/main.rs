use std::io::{self, Read, Write};

use anyhow::Context;
use clap::Parser;
use lib_merge::{
    ai::{Ai, GreedyAi, RandomAi},
    metrics, Direction, Game,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

mod cli;
mod render;

use cli::{Cli, Mode};

/// Escape sequences for the arrow keys, in `Direction` order, followed by the quit key.
const KEY_PATTERNS: [&[u8]; 5] = [b"\x1b[A", b"\x1b[B", b"\x1b[C", b"\x1b[D", b"q"];
const QUIT_KEY: usize = 4;

fn play_interactive(
    out: &mut impl Write,
    input: &mut impl Read,
    game: &mut Game<impl Rng>,
) -> anyhow::Result<()> {
    let mut buf = [0u8; 128];

    let input_searcher =
        aho_corasick::AhoCorasick::new(KEY_PATTERNS).context("building key searcher")?;

    let mut buf_len = 0;

    render::draw_board(out, game.board(), game.palette(), game.score())?;

    'input: loop {
        let read = input.read(&mut buf[buf_len..])?;

        if read == 0 {
            break;
        }

        buf_len += read;

        for key in input_searcher
            .find_iter(&buf[..buf_len])
            .map(|m| m.pattern().as_usize())
        {
            if key == QUIT_KEY {
                break 'input;
            }

            let direction = Direction::ALL[key];
            let (old_board, old_score) = (game.board().clone(), game.score());

            let (merges, changed) = game.play(direction);
            debug!(%direction, merges, changed, "key press");

            if changed {
                render::redraw_board(
                    out,
                    &old_board,
                    game.board(),
                    game.palette(),
                    old_score,
                    game.score(),
                )?;
            }
        }

        // Keep a partial escape sequence for the next read.
        buf_len = match &buf[..buf_len] {
            [.., 0x1b, b'['] => {
                buf[..2].copy_from_slice(b"\x1b[");
                2
            }
            [.., 0x1b] => {
                buf[0] = 0x1b;
                1
            }
            _ => 0,
        }
    }

    writeln!(out, "Final score: {}", game.score())?;

    Ok(())
}

fn play_ai(
    out: &mut impl Write,
    game: &mut Game<impl Rng>,
    ai: &mut impl Ai,
    moves: u32,
) -> anyhow::Result<()> {
    render::draw_board(out, game.board(), game.palette(), game.score())?;

    let mut played = 0;

    while played < moves {
        let Some(direction) = ai.get_next_move(game.board()) else {
            info!(played, "no move changes the board");
            break;
        };

        let (old_board, old_score) = (game.board().clone(), game.score());

        game.play(direction);
        played += 1;

        render::redraw_board(
            out,
            &old_board,
            game.board(),
            game.palette(),
            old_score,
            game.score(),
        )?;
    }

    writeln!(
        out,
        "Played {played} moves, score {}, {} empty cells",
        game.score(),
        metrics::empty_count(game.board())
    )?;

    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = cli.game_config()?;
    let seed = cli.seed.unwrap_or_else(rand::random);

    info!(seed, size = config.size, mode = ?cli.mode, "starting game");

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let ai_rng = ChaCha8Rng::from_rng(&mut rng)?;

    let mut game = Game::from_config(&config, rng)?;

    let mut stdout = io::stdout().lock();

    match cli.mode {
        Mode::Interactive => {
            let mut stdin = io::stdin().lock();
            let _terminal = render::RawTerminal::new(&stdin).context("configuring terminal")?;

            play_interactive(&mut stdout, &mut stdin, &mut game)
        }
        Mode::Random => play_ai(&mut stdout, &mut game, &mut RandomAi::new(ai_rng), cli.moves),
        Mode::Greedy => play_ai(&mut stdout, &mut game, &mut GreedyAi, cli.moves),
    }
}
