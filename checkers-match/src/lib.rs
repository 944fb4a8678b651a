//! Checkers Match - Engine play through complete games
//!
//! This crate provides match infrastructure around the core engine:
//! - Seated players (minimax or random)
//! - Single games from any position
//! - Matches with alternating colors, optionally in parallel
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 2: play_match (phases)
//! - Level 3: play_game, GameRunner (steps)
//! - Level 4: configuration

mod config;
mod game_runner;
mod match_play;

pub use config::{MatchConfig, PlayerType};
pub use game_runner::{play_game, GameOutcome, GameRunner, Player};
pub use match_play::{play_match, MatchGame, MatchResult};
