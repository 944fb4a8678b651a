//! Match play - multiple games between two player types
//!
//! Level 2 - Phase-level implementation

use rayon::prelude::*;

use checkers_core::Side;

use crate::config::MatchConfig;
use crate::game_runner::{GameOutcome, GameRunner};

/// Seed used when the config leaves it unset
const DEFAULT_SEED: u64 = 42;

/// One finished game of a match
#[derive(Clone, Debug)]
pub struct MatchGame {
    /// 1-based game number
    pub game_number: usize,
    /// Color the first player had in this game
    pub first_side: Side,
    pub outcome: GameOutcome,
}

/// Result of a match (multiple games)
#[derive(Clone, Debug, Default)]
pub struct MatchResult {
    /// Wins for the first player
    pub first_wins: u32,
    /// Wins for the second player
    pub second_wins: u32,
    /// Draws (ply cap or repetition)
    pub draws: u32,
    /// Wins by color, regardless of player
    pub red_wins: u32,
    pub black_wins: u32,
    /// Average game length in plies
    pub avg_plies: f32,
    /// Total games played
    pub games_played: u32,
    /// Individual games in order
    pub games: Vec<MatchGame>,
}

impl MatchResult {
    /// Aggregate finished games
    pub fn from_games(mut games: Vec<MatchGame>) -> Self {
        games.sort_by_key(|g| g.game_number);

        let mut result = MatchResult::default();
        let mut total_plies = 0u64;

        for game in &games {
            total_plies += game.outcome.plies as u64;
            match game.outcome.winner() {
                Some(side) if side == game.first_side => result.first_wins += 1,
                Some(_) => result.second_wins += 1,
                None => result.draws += 1,
            }
            match game.outcome.winner() {
                Some(Side::Red) => result.red_wins += 1,
                Some(Side::Black) => result.black_wins += 1,
                None => {}
            }
        }

        result.games_played = games.len() as u32;
        result.avg_plies = if games.is_empty() {
            0.0
        } else {
            total_plies as f32 / games.len() as f32
        };
        result.games = games;
        result
    }

    /// Get win rate for the first player
    pub fn first_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.first_wins as f32 / self.games_played as f32
        }
    }

    /// Get win rate for the second player
    pub fn second_win_rate(&self) -> f32 {
        if self.games_played == 0 {
            0.0
        } else {
            self.second_wins as f32 / self.games_played as f32
        }
    }
}

/// Play a match, alternating colors each game
pub fn play_match(config: &MatchConfig) -> MatchResult {
    let games: Vec<MatchGame> = if config.parallel {
        (0..config.games)
            .into_par_iter()
            .map(|index| play_one(config, index))
            .collect()
    } else {
        (0..config.games).map(|index| play_one(config, index)).collect()
    };

    MatchResult::from_games(games)
}

/// Play game `index` of the match. Seeds depend only on the index, so
/// sequential and parallel runs produce the same games.
fn play_one(config: &MatchConfig, index: usize) -> MatchGame {
    let base = config.seed.unwrap_or(DEFAULT_SEED);
    let seed = base.wrapping_add(2 * index as u64);

    let first_is_red = index % 2 == 0;
    let (red, black) = if first_is_red {
        (config.first, config.second)
    } else {
        (config.second, config.first)
    };

    let outcome = GameRunner::new(red, black, config.max_plies, seed).play();

    tracing::info!(
        "Game {}: {} (red) vs {} (black): {:?} in {} plies",
        index + 1,
        red,
        black,
        outcome.result,
        outcome.plies
    );

    MatchGame {
        game_number: index + 1,
        first_side: if first_is_red { Side::Red } else { Side::Black },
        outcome,
    }
}
