//! Plays one game with uniformly random legal moves and prints the result
//!
//! Run with: cargo run -p hexataxx-core --example random_playout -- [seed] [config.json]

use std::path::Path;

use hexataxx_core::{legal_moves, GameConfig, GameState, Hex, Owner};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const MAX_PLIES: usize = 1000;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let seed: u64 = args.next().map(|s| s.parse()).transpose()?.unwrap_or(42);
    let config = match args.next() {
        Some(path) => GameConfig::load(Path::new(&path))?,
        None => GameConfig::default(),
    };

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut game = GameState::from_config(&config)?;

    for _ in 0..MAX_PLIES {
        if game.status().is_over() {
            break;
        }
        let moves = legal_moves(game.board(), game.current_player());
        let Some(mv) = moves.choose(&mut rng) else {
            println!("{} is stuck", game.current_player().color());
            break;
        };
        game = game.make_move(*mv)?;
    }

    print_board(&game);
    let scores = game.scores();
    println!("red {} - blue {}", scores.a, scores.b);
    println!("{}", game.status_report().result_message());
    Ok(())
}

/// Each row q is shifted half a cell per step so axial neighbors line up
fn print_board(game: &GameState) {
    let size = game.board_size();
    for q in 0..size.height() {
        let mut line = " ".repeat(q as usize);
        for r in 0..size.width() {
            let glyph = match game.board().get(Hex::new(q, r)) {
                Ok(Owner::PlayerA) => 'R',
                Ok(Owner::PlayerB) => 'B',
                _ => '.',
            };
            line.push(glyph);
            line.push(' ');
        }
        println!("{}", line.trim_end());
    }
}
