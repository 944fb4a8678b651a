//! Configuration types for match play
//!
//! Level 4 - Utilities and configuration

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use checkers_core::DEFAULT_MAX_PLIES;

/// Player type for games
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerType {
    /// Adaptive-depth minimax search
    #[default]
    Minimax,
    /// Uniformly random legal move
    Random,
}

impl fmt::Display for PlayerType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerType::Minimax => write!(f, "minimax"),
            PlayerType::Random => write!(f, "random"),
        }
    }
}

impl FromStr for PlayerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" | "ai" => Ok(PlayerType::Minimax),
            "random" => Ok(PlayerType::Random),
            other => Err(format!("unknown player type '{}' (expected minimax or random)", other)),
        }
    }
}

/// Match configuration. Missing JSON fields fall back to the defaults.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Player that takes Red in games 1, 3, 5, ...
    pub first: PlayerType,
    /// Player that takes Red in games 2, 4, 6, ...
    pub second: PlayerType,
    /// Number of games (colors alternate each game)
    pub games: usize,
    /// Ply cap before a game is drawn
    pub max_plies: u32,
    /// Base random seed (None = 42)
    pub seed: Option<u64>,
    /// Whether to run games in parallel
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            first: PlayerType::Minimax,
            second: PlayerType::Random,
            games: 10,
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
            parallel: false,
        }
    }
}

impl MatchConfig {
    /// Create config for the given pairing
    pub fn new(first: PlayerType, second: PlayerType) -> Self {
        Self {
            first,
            second,
            ..Default::default()
        }
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read match config: {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("Invalid match config: {}", path.display()))?;
        Ok(config)
    }

    /// Set number of games
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set ply cap
    pub fn with_max_plies(mut self, max_plies: u32) -> Self {
        self.max_plies = max_plies;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Run games on the rayon thread pool
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_config_defaults() {
        let config = MatchConfig::default();
        assert_eq!(config.first, PlayerType::Minimax);
        assert_eq!(config.second, PlayerType::Random);
        assert_eq!(config.games, 10);
        assert_eq!(config.max_plies, DEFAULT_MAX_PLIES);
        assert!(!config.parallel);
    }

    #[test]
    fn test_match_config_builders() {
        let config = MatchConfig::new(PlayerType::Random, PlayerType::Random)
            .with_games(4)
            .with_max_plies(60)
            .with_seed(9)
            .with_parallel(true);
        assert_eq!(config.games, 4);
        assert_eq!(config.max_plies, 60);
        assert_eq!(config.seed, Some(9));
        assert!(config.parallel);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: MatchConfig = serde_json::from_str(r#"{ "games": 3, "second": "minimax" }"#).unwrap();
        assert_eq!(config.games, 3);
        assert_eq!(config.first, PlayerType::Minimax);
        assert_eq!(config.second, PlayerType::Minimax);
        assert_eq!(config.max_plies, DEFAULT_MAX_PLIES);
    }

    #[test]
    fn test_player_type_parsing() {
        assert_eq!("Random".parse::<PlayerType>().unwrap(), PlayerType::Random);
        assert_eq!("ai".parse::<PlayerType>().unwrap(), PlayerType::Minimax);
        assert!("greedy".parse::<PlayerType>().is_err());
    }
}
