//! Moves and legal move generation

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Pos, Side, EMPTY};

/// Diagonal directions as (d_row, d_col) relative to the mover, forward first
const DIAGONALS: [(i8, i8); 4] = [(1, -1), (1, 1), (-1, -1), (-1, 1)];

// ============================================================================
// MOVE
// ============================================================================

/// One turn's action: the origin square followed by every landing square.
/// Consecutive hops two rows apart are captures.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    hops: Vec<Pos>,
}

impl Move {
    pub fn new(hops: Vec<Pos>) -> Self {
        assert!(!hops.is_empty(), "a move needs at least one hop");
        Self { hops }
    }

    /// Single diagonal step
    pub fn step(from: Pos, to: Pos) -> Self {
        Self { hops: vec![from, to] }
    }

    pub fn hops(&self) -> &[Pos] {
        &self.hops
    }

    /// Square the moving piece starts on
    pub fn from(&self) -> Pos {
        self.hops[0]
    }

    /// Square the moving piece ends on
    pub fn to(&self) -> Pos {
        self.hops[self.hops.len() - 1]
    }

    pub fn is_capture(&self) -> bool {
        self.captured().next().is_some()
    }

    /// Squares of the pieces jumped by this move
    pub fn captured(&self) -> impl Iterator<Item = Pos> + '_ {
        self.hops
            .windows(2)
            .filter(|pair| (pair[0].row - pair[1].row).abs() == 2)
            .map(|pair| pair[0].midpoint(pair[1]))
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sep = if self.is_capture() { "x" } else { "-" };
        for (i, hop) in self.hops.iter().enumerate() {
            if i > 0 {
                f.write_str(sep)?;
            }
            write!(f, "{}", hop)?;
        }
        Ok(())
    }
}

// ============================================================================
// MOVE GENERATION
// ============================================================================

/// Source of legal moves consumed by the search
pub trait MoveGenerator {
    /// All legal moves for `side`, already filtered for mandatory captures
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Move>;
}

impl<G: MoveGenerator + ?Sized> MoveGenerator for &G {
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Move> {
        (**self).legal_moves(board, side)
    }
}

/// American checkers rules: men step forward diagonally, kings in any
/// diagonal, captures are mandatory and jump chains run to completion.
/// A man reaching the crown row ends its move there.
#[derive(Clone, Copy, Debug, Default)]
pub struct StandardRules;

impl MoveGenerator for StandardRules {
    fn legal_moves(&self, board: &Board, side: Side) -> Vec<Move> {
        let mut moves = Vec::new();

        for (pos, cell) in board.iter() {
            if side.owns(cell) {
                generate_jump_moves(board, side, pos, cell, &mut moves);
            }
        }
        if !moves.is_empty() {
            return moves;
        }

        for (pos, cell) in board.iter() {
            if side.owns(cell) {
                generate_step_moves(board, side, pos, cell, &mut moves);
            }
        }
        moves
    }
}

/// Directions a piece may travel: men only toward the opponent
fn directions(side: Side, piece: i8) -> impl Iterator<Item = (i8, i8)> {
    let is_king = piece.abs() == 2;
    let forward = side.sign();
    DIAGONALS
        .into_iter()
        .filter(move |&(d_row, _)| is_king || d_row == 1)
        .map(move |(d_row, d_col)| (d_row * forward, d_col))
}

fn generate_step_moves(board: &Board, side: Side, pos: Pos, piece: i8, moves: &mut Vec<Move>) {
    for (d_row, d_col) in directions(side, piece) {
        let to = pos.offset(d_row, d_col);
        if to.is_valid() && board.get(to) == EMPTY {
            moves.push(Move::step(pos, to));
        }
    }
}

fn generate_jump_moves(board: &Board, side: Side, pos: Pos, piece: i8, moves: &mut Vec<Move>) {
    // The origin is vacated so a king may loop back through it
    let mut work = *board;
    work.set(pos, EMPTY);

    let mut path = vec![pos];
    let mut captured = Vec::new();
    extend_jump_chain(&work, side, piece, &mut path, &mut captured, moves);
}

/// Depth-first walk over jump continuations. Captured pieces stay on the
/// board until the move ends, so they block landings but cannot be jumped twice.
fn extend_jump_chain(
    board: &Board,
    side: Side,
    piece: i8,
    path: &mut Vec<Pos>,
    captured: &mut Vec<Pos>,
    moves: &mut Vec<Move>,
) {
    let here = path[path.len() - 1];
    let mut extended = false;

    for (d_row, d_col) in directions(side, piece) {
        let over = here.offset(d_row, d_col);
        let land = here.offset(2 * d_row, 2 * d_col);
        if !land.is_valid() || board.get(land) != EMPTY {
            continue;
        }
        if !side.opponent().owns(board.get(over)) || captured.contains(&over) {
            continue;
        }

        extended = true;
        path.push(land);
        captured.push(over);

        let crowned = piece.abs() == 1 && land.row == side.crown_row();
        if crowned {
            moves.push(Move::new(path.clone()));
        } else {
            extend_jump_chain(board, side, piece, path, captured, moves);
        }

        captured.pop();
        path.pop();
    }

    if !extended && path.len() > 1 {
        moves.push(Move::new(path.clone()));
    }
}
