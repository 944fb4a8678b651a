//! Best-move command - run the engine on one position
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: load_position(), search(), report()
//! - Level 4: rng and formatting utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use checkers_core::ai::analyze;
use checkers_core::{board_value, Position, SearchOutcome, Side, StandardRules};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct BestMoveArgs {
    /// Position file (JSON or text); defaults to the opening position
    #[arg(long, value_name = "FILE")]
    pub position: Option<PathBuf>,

    /// Side to move, overriding the position file
    #[arg(long)]
    pub side: Option<Side>,

    /// Output result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct JsonReport {
    position: Option<String>,
    side: Side,
    #[serde(rename = "move")]
    mv: Option<String>,
    hops: Option<Vec<checkers_core::Pos>>,
    score: Option<i32>,
    depth: Option<u32>,
    tied: Option<usize>,
    value_after: Option<i32>,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run best-move command
pub fn run(args: BestMoveArgs, seed: Option<u64>) -> Result<()> {
    let position = load_position(&args)?;
    let mut rng = create_rng(seed);

    tracing::info!(
        "Searching {} for {}",
        position.name.as_deref().unwrap_or("position"),
        position.side
    );

    let outcome = analyze(&StandardRules, &position.board, position.side, &mut rng);
    if outcome.is_none() {
        tracing::warn!("{} has no legal moves", position.side);
    }

    report(&position, outcome.as_ref(), args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn load_position(args: &BestMoveArgs) -> Result<Position> {
    let mut position = match &args.position {
        Some(path) => Position::load(path)
            .with_context(|| format!("Failed to load position: {}", path.display()))?,
        None => Position::initial(),
    };
    if let Some(side) = args.side {
        position.side = side;
    }
    Ok(position)
}

fn report(position: &Position, outcome: Option<&SearchOutcome>, json: bool) -> Result<()> {
    let after = outcome.map(|o| position.board.apply_move(Some(&o.mv), position.side));

    if json {
        let report = JsonReport {
            position: position.name.clone(),
            side: position.side,
            mv: outcome.map(|o| o.mv.to_string()),
            hops: outcome.map(|o| o.mv.hops().to_vec()),
            score: outcome.map(|o| o.score),
            depth: outcome.map(|o| o.depth),
            tied: outcome.map(|o| o.tied),
            value_after: after.map(|b| board_value(&b, position.side)),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} to move:\n{}", position.side, position.board);
    match (outcome, after) {
        (Some(o), Some(board)) => {
            println!(
                "Best move: {} (score {}, depth {}, {} tied)",
                o.mv, o.score, o.depth, o.tied
            );
            println!("\n{}", board);
        }
        _ => println!("No legal moves: {} cannot move", position.side),
    }
    Ok(())
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Create RNG from seed or random
pub(crate) fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => ChaCha8Rng::from_entropy(),
    }
}
