//! Checkers Core - Board model and minimax engine
//!
//! This crate provides the decision-making engine for 8x8 checkers:
//! - Board snapshots, sides and move application
//! - Legal move generation (American checkers rules)
//! - Static evaluation with edge and king bonuses
//! - Adaptive search depth and minimax move selection
//! - A small game state for self-play

pub mod board;
pub mod moves;
pub mod eval;
pub mod depth;
pub mod ai;
pub mod game;
pub mod position;
pub mod error;

// Re-exports for convenient access
pub use board::{apply_move, Board, Pos, Side, BOARD_SIZE};
pub use moves::{Move, MoveGenerator, StandardRules};
pub use eval::{board_value, LOSS_VALUE, WIN_VALUE};
pub use depth::search_depth;
pub use ai::{choose_move, get_max_move, get_min_move, minimax, MinimaxAI, SearchOutcome};
pub use game::{GameResult, GameState, DEFAULT_MAX_PLIES};
pub use position::Position;
pub use error::PositionError;
