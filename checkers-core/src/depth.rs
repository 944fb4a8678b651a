//! Adaptive search depth

use crate::board::{Board, Side};

/// Piece count at or above which the opening depth applies
const OPENING_PIECES: usize = 22;

/// Piece count at or below which the endgame depth applies
const ENDGAME_PIECES: usize = 6;

pub const OPENING_DEPTH: u32 = 4;
pub const MIDGAME_DEPTH: u32 = 5;
pub const ENDGAME_DEPTH: u32 = 6;

/// Search deeper as the board empties out and the branching factor shrinks
pub fn search_depth(board: &Board, side: Side) -> u32 {
    let mine = board.count_pieces(side);
    let theirs = board.count_pieces(side.opponent());

    match mine + theirs {
        n if n >= OPENING_PIECES => OPENING_DEPTH,
        n if n > ENDGAME_PIECES => MIDGAME_DEPTH,
        _ => ENDGAME_DEPTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, BLACK_MAN, RED_MAN};

    /// Board with `red` Red men and `black` Black men on distinct playable squares
    fn board_with(red: usize, black: usize) -> Board {
        let mut squares = Board::squares().filter(Pos::is_playable);
        let mut board = Board::empty();
        for pos in squares.by_ref().take(red) {
            board.set(pos, RED_MAN);
        }
        for pos in squares.take(black) {
            board.set(pos, BLACK_MAN);
        }
        board
    }

    #[test]
    fn test_depth_boundaries() {
        assert_eq!(search_depth(&board_with(12, 12), Side::Red), 4);
        assert_eq!(search_depth(&board_with(11, 11), Side::Red), 4);
        assert_eq!(search_depth(&board_with(11, 10), Side::Black), 5);
        assert_eq!(search_depth(&board_with(4, 3), Side::Red), 5);
        assert_eq!(search_depth(&board_with(3, 3), Side::Red), 6);
        assert_eq!(search_depth(&board_with(1, 0), Side::Black), 6);
        assert_eq!(search_depth(&Board::empty(), Side::Red), 6);
    }

    #[test]
    fn test_depth_counts_both_sides() {
        let board = board_with(7, 0);
        assert_eq!(search_depth(&board, Side::Red), search_depth(&board, Side::Black));
    }
}
