//! Game state for self-play and matches

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::moves::Move;

/// Default ply cap before a game is declared drawn
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// Occurrences of the same position (with the same side to move) that draw the game
const REPETITION_LIMIT: u8 = 3;

/// Game result
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    Ongoing,
    RedWins,
    BlackWins,
    Draw,
}

impl GameResult {
    pub fn win_for(side: Side) -> Self {
        match side {
            Side::Red => GameResult::RedWins,
            Side::Black => GameResult::BlackWins,
        }
    }

    /// Winning side, `None` for draws and unfinished games
    pub fn winner(self) -> Option<Side> {
        match self {
            GameResult::RedWins => Some(Side::Red),
            GameResult::BlackWins => Some(Side::Black),
            GameResult::Ongoing | GameResult::Draw => None,
        }
    }
}

/// Game state (clone to branch)
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Side,
    ply: u32,
    max_plies: u32,
    result: GameResult,

    /// How often each (board, side to move) has been reached
    seen: FxHashMap<(Board, Side), u8>,
}

impl GameState {
    pub fn new(board: Board, side_to_move: Side, max_plies: u32) -> Self {
        let mut seen = FxHashMap::default();
        seen.insert((board, side_to_move), 1);
        Self {
            board,
            side_to_move,
            ply: 0,
            max_plies,
            result: GameResult::Ongoing,
            seen,
        }
    }

    /// Standard opening, Red to move
    pub fn initial(max_plies: u32) -> Self {
        Self::new(Board::initial(), Side::Red, max_plies)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    pub fn ply(&self) -> u32 {
        self.ply
    }

    pub fn result(&self) -> GameResult {
        self.result
    }

    pub fn is_over(&self) -> bool {
        self.result != GameResult::Ongoing
    }

    /// Play `mv` for the side to move. Draws on the third repetition or at the ply cap.
    pub fn apply_move(&mut self, mv: &Move) {
        if self.is_over() {
            return;
        }

        self.board = self.board.apply_move(Some(mv), self.side_to_move);
        self.side_to_move = self.side_to_move.opponent();
        self.ply += 1;

        let count = self.seen.entry((self.board, self.side_to_move)).or_insert(0);
        *count += 1;

        if *count >= REPETITION_LIMIT || self.ply >= self.max_plies {
            self.result = GameResult::Draw;
        }
    }

    /// The side to move has no legal move and loses
    pub fn concede(&mut self) {
        if !self.is_over() {
            self.result = GameResult::win_for(self.side_to_move.opponent());
        }
    }
}
