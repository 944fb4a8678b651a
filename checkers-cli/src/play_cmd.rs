//! Play command - engine self-play of one game

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::Rng;

use checkers_core::{GameState, MinimaxAI, Position, DEFAULT_MAX_PLIES};

use crate::best_move::create_rng;

#[derive(Args)]
pub struct PlayArgs {
    /// Starting position file (JSON or text); defaults to the opening position
    #[arg(long, value_name = "FILE")]
    pub position: Option<PathBuf>,

    /// Maximum plies before the game is drawn
    #[arg(long, default_value_t = DEFAULT_MAX_PLIES)]
    pub max_plies: u32,

    /// Only print the final result
    #[arg(long)]
    pub quiet: bool,
}

/// Run play command
pub fn run(args: PlayArgs, seed: Option<u64>) -> Result<()> {
    let start = match &args.position {
        Some(path) => Position::load(path)
            .with_context(|| format!("Failed to load position: {}", path.display()))?,
        None => Position::initial(),
    };

    let mut state = GameState::new(start.board, start.side, args.max_plies);
    let mut ai = MinimaxAI::with_seed(create_rng(seed).gen());

    tracing::info!("Self-play from {} ({} to move)", start.name.as_deref().unwrap_or("position"), start.side);

    if !args.quiet {
        println!("{}", state.board());
    }

    while !state.is_over() {
        let side = state.side_to_move();
        match ai.choose_move(state.board(), side) {
            Some(mv) => {
                state.apply_move(&mv);
                if !args.quiet {
                    println!("{:>3}. {:<5} {}\n{}", state.ply(), side.to_string(), mv, state.board());
                }
            }
            None => {
                tracing::info!("{} has no legal moves", side);
                state.concede();
            }
        }
    }

    println!("Result: {:?} after {} plies", state.result(), state.ply());
    Ok(())
}
