use std::error::Error;

use clap::Parser;
use log::{debug, info};
use othello_core::{apply_move, initial_board, is_game_over, legal_moves, score, Player};
use othello_engine::{OthelloAI, SearchConfig, SearchStrategy};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Plays the engine against itself and reports the result.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search depth in plies, root move included
    #[arg(long, default_value_t = 5)]
    depth: u8,
    /// Log search details and the board after every move
    #[arg(long)]
    debug: bool,
    /// Evaluate root moves in parallel
    #[arg(long)]
    parallel: bool,
    /// Build the full game tree before evaluating it (depth capped at 6,
    /// memory grows with branching^depth)
    #[arg(long)]
    materialized: bool,
    /// Number of random placements before the engine takes over
    #[arg(long, default_value_t = 0)]
    random_openings: usize,
    #[arg(long, default_value_t = 0)]
    seed: u64,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let level = if args.debug { log::Level::Debug } else { log::Level::Info };
    simple_logger::init_with_level(level)?;

    let strategy = if args.materialized {
        SearchStrategy::Materialized
    } else {
        SearchStrategy::Recursive
    };
    let ai = OthelloAI::with_config(
        SearchConfig::new(args.depth)
            .with_debug(args.debug)
            .with_parallel(args.parallel)
            .with_strategy(strategy),
    );
    let mut rng = StdRng::seed_from_u64(args.seed);

    let mut board = initial_board();
    let mut player = Player::Dark;
    let mut placements = 0;

    while !is_game_over(&board) {
        let choice = if placements < args.random_openings {
            legal_moves(&board, player).choose(&mut rng).copied()
        } else {
            ai.get_move(&board, player)?
        };

        match choice {
            Some(mv) => {
                board = apply_move(&board, mv, player)?;
                placements += 1;
                debug!("{} played {}:\n{}", player, mv, board);
            }
            None => debug!("{} passes", player),
        }
        player = player.opponent();
    }

    let dark = score(&board, Player::Dark);
    let light = score(&board, Player::Light);
    info!("final position after {} placements:\n{}", placements, board);
    match board.winner() {
        Some(winner) => info!("{} wins {}-{}", winner, dark.max(light), dark.min(light)),
        None => info!("draw {}-{}", dark, light),
    }

    Ok(())
}
