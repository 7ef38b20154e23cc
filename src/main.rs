//! Self-play demo: the engine plays both sides until the game ends.
//!
//! ```text
//! chess_search [depth] [board text]
//! ```
//!
//! Logging is controlled with `RUST_LOG`, e.g. `RUST_LOG=chess_search=debug`.

use std::env;
use std::process;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use chess_search::{ChessResult, Position, SearchConfig, SearchEngine};
use chess_search::tools::eval::MaterialEvaluator;

const MAX_PLIES: u16 = 400;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(err) = run(env::args().skip(1).collect()) {
        error!(%err, "stopping");
        process::exit(2);
    }
}

fn run(args: Vec<String>) -> ChessResult<()> {
    let mut config = SearchConfig::default().parallel(true);
    if let Some(depth) = args.first() {
        match depth.parse() {
            Ok(depth) => config = config.depth(depth),
            Err(_) => {
                error!(%depth, "depth must be a small positive number");
                process::exit(2);
            }
        }
    }
    let mut position = if args.len() > 1 {
        Position::from_text(&args[1..].join(" "))?
    } else {
        Position::start_pos()
    };

    let engine = SearchEngine::new(config, MaterialEvaluator);
    println!("{}", position.pretty_string());
    while !position.game_over() && position.ply_count() < MAX_PLIES {
        let mov = match engine.best_move(&position) {
            Some(mov) => mov,
            None => break,
        };
        info!(ply = position.ply_count() + 1, player = %position.turn(), %mov, "move");
        position.apply_move(mov)?;
        println!("{}", position.pretty_string());
    }
    info!(outcome = %position.outcome(), text = %position.to_text(), "game over");
    Ok(())
}
