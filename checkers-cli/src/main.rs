//! Checkers CLI - Command-line interface
//!
//! Commands:
//! - best-move: Choose a move for a position
//! - match: Play a match between two player types
//! - play: Watch the engine play itself

mod best_move;
mod match_cmd;
mod play_cmd;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "checkers")]
#[command(about = "Minimax checkers engine")]
struct Cli {
    /// Random seed for reproducible tie-breaking
    #[arg(long, global = true)]
    seed: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Choose a move for a position
    BestMove(best_move::BestMoveArgs),
    /// Play a match between two player types
    Match(match_cmd::MatchArgs),
    /// Engine self-play of a single game
    Play(play_cmd::PlayArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::BestMove(args) => best_move::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Play(args) => play_cmd::run(args, cli.seed),
    }
}
