//! Match command - play games between two player types
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), play_match(), report_results()
//! - Level 4: formatting utilities

use std::path::PathBuf;

use anyhow::{bail, Result};
use clap::Args;

use checkers_match::{play_match, MatchConfig, MatchResult, PlayerType};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Match config JSON file; flags below override its fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// First player (red in odd-numbered games)
    #[arg(long)]
    pub first: Option<PlayerType>,

    /// Second player (red in even-numbered games)
    #[arg(long)]
    pub second: Option<PlayerType>,

    /// Number of games to play (will alternate colors)
    #[arg(long)]
    pub games: Option<usize>,

    /// Maximum plies per game before a draw
    #[arg(long)]
    pub max_plies: Option<u32>,

    /// Run games in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Build the match config from file and flags
/// 2. Play the match
/// 3. Report results
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let config = build_config(&args, seed)?;

    tracing::info!(
        "Starting match: {} vs {} ({} games, max {} plies{})",
        config.first,
        config.second,
        config.games,
        config.max_plies,
        if config.parallel { ", parallel" } else { "" }
    );

    let results = play_match(&config);

    report_results(&config, &results, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_config(args: &MatchArgs, seed: Option<u64>) -> Result<MatchConfig> {
    let mut config = match &args.config {
        Some(path) => MatchConfig::load(path)?,
        None => MatchConfig::default(),
    };

    if let Some(first) = args.first {
        config.first = first;
    }
    if let Some(second) = args.second {
        config.second = second;
    }
    if let Some(games) = args.games {
        config.games = games;
    }
    if let Some(max_plies) = args.max_plies {
        config.max_plies = max_plies;
    }
    if args.parallel {
        config.parallel = true;
    }
    if seed.is_some() {
        config.seed = seed;
    }

    if config.games == 0 {
        bail!("a match needs at least one game");
    }
    if config.max_plies == 0 {
        bail!("max plies must be positive");
    }
    Ok(config)
}

fn report_results(config: &MatchConfig, results: &MatchResult, json: bool) -> Result<()> {
    if json {
        print_json_results(config, results)
    } else {
        print_text_results(config, results);
        Ok(())
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn percent(count: u32, total: u32) -> f32 {
    if total > 0 {
        count as f32 / total as f32 * 100.0
    } else {
        0.0
    }
}

/// Print results as JSON
fn print_json_results(config: &MatchConfig, results: &MatchResult) -> Result<()> {
    #[derive(serde::Serialize)]
    struct JsonGame {
        game_number: usize,
        first_side: String,
        result: String,
        plies: u32,
    }

    #[derive(serde::Serialize)]
    struct JsonOutput<'a> {
        config: &'a MatchConfig,
        total_games: u32,
        first_wins: u32,
        second_wins: u32,
        draws: u32,
        red_wins: u32,
        black_wins: u32,
        avg_plies: f32,
        first_win_rate: f32,
        games: Vec<JsonGame>,
    }

    let output = JsonOutput {
        config,
        total_games: results.games_played,
        first_wins: results.first_wins,
        second_wins: results.second_wins,
        draws: results.draws,
        red_wins: results.red_wins,
        black_wins: results.black_wins,
        avg_plies: results.avg_plies,
        first_win_rate: results.first_win_rate(),
        games: results
            .games
            .iter()
            .map(|g| JsonGame {
                game_number: g.game_number,
                first_side: g.first_side.to_string(),
                result: format!("{:?}", g.outcome.result),
                plies: g.outcome.plies,
            })
            .collect(),
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Print results as text
fn print_text_results(config: &MatchConfig, results: &MatchResult) {
    let total = results.games_played;

    println!("\n=== Match Results ===");
    println!("Total games:  {}", total);
    println!(
        "{:<8} wins: {} ({:.1}%)",
        config.first.to_string(),
        results.first_wins,
        percent(results.first_wins, total)
    );
    println!(
        "{:<8} wins: {} ({:.1}%)",
        config.second.to_string(),
        results.second_wins,
        percent(results.second_wins, total)
    );
    println!("Draws:        {} ({:.1}%)", results.draws, percent(results.draws, total));
    println!("Red / Black:  {} / {}", results.red_wins, results.black_wins);
    println!("Avg plies:    {:.1}", results.avg_plies);

    println!("\nGame details:");
    for game in &results.games {
        println!(
            "  Game {}: first player {} -> {:?} in {} plies",
            game.game_number, game.first_side, game.outcome.result, game.outcome.plies
        );
    }
}
