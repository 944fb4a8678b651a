//! Static position evaluation

use crate::board::{Board, Side};

/// Score of a board with no opposing piece left
pub const WIN_VALUE: i32 = 1000;

/// Score of a board where the perspective side has no men left
pub const LOSS_VALUE: i32 = -1000;

/// Score `board` from `perspective`'s point of view, higher is better.
///
/// Material is the raw cell sum. A perspective man on column 0 or 7 counts
/// double, and a perspective king counts double again. Opponent pieces never
/// get a bonus. The total is signed for `perspective` once at the end.
///
/// Overrides: a board without any opposing piece (the empty board included)
/// is [`WIN_VALUE`]; otherwise a board without any perspective man is
/// [`LOSS_VALUE`]. A side left with kings only therefore scores as lost.
pub fn board_value(board: &Board, perspective: Side) -> i32 {
    let man = perspective.man();
    let king = perspective.king();

    let mut sum = 0i32;
    let mut win = true;
    let mut lose = true;

    for (pos, cell) in board.iter() {
        if perspective.opponent().owns(cell) {
            win = false;
        }
        if cell == man {
            lose = false;
        }

        let mut piece_value = cell as i32;
        if cell == man && pos.is_edge_column() {
            piece_value *= 2;
        }
        if cell == king {
            piece_value *= 2;
        }
        sum += piece_value;
    }

    if win {
        WIN_VALUE
    } else if lose {
        LOSS_VALUE
    } else {
        sum * perspective.sign() as i32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, BLACK_KING, BLACK_MAN, RED_KING, RED_MAN};

    #[test]
    fn test_initial_board_is_balanced() {
        // Each side starts with three men on the edge columns
        let board = Board::initial();
        assert_eq!(board_value(&board, Side::Red), 3);
        assert_eq!(board_value(&board, Side::Black), 3);
    }

    #[test]
    fn test_lone_piece_wins() {
        let board = Board::empty().with(Pos::new(3, 4), RED_MAN);
        assert_eq!(board_value(&board, Side::Red), WIN_VALUE);
        assert_eq!(board_value(&board, Side::Black), LOSS_VALUE);
    }

    #[test]
    fn test_empty_board_is_a_win() {
        assert_eq!(board_value(&Board::empty(), Side::Red), WIN_VALUE);
        assert_eq!(board_value(&Board::empty(), Side::Black), WIN_VALUE);
    }

    #[test]
    fn test_kings_only_counts_as_loss() {
        let board = Board::empty()
            .with(Pos::new(3, 4), RED_KING)
            .with(Pos::new(5, 4), BLACK_MAN);
        assert_eq!(board_value(&board, Side::Red), LOSS_VALUE);
    }

    #[test]
    fn test_edge_and_king_bonuses() {
        let board = Board::empty()
            .with(Pos::new(1, 0), RED_MAN) // edge man: 2
            .with(Pos::new(2, 3), RED_MAN) // 1
            .with(Pos::new(4, 3), RED_KING) // king: 4
            .with(Pos::new(5, 0), BLACK_MAN) // no bonus: -1
            .with(Pos::new(6, 1), BLACK_KING); // no bonus: -2
        assert_eq!(board_value(&board, Side::Red), 4);
    }

    #[test]
    fn test_sign_flip_for_black() {
        let board = Board::empty()
            .with(Pos::new(1, 2), RED_MAN)
            .with(Pos::new(2, 3), RED_MAN)
            .with(Pos::new(5, 0), BLACK_MAN) // edge man: -2
            .with(Pos::new(5, 4), BLACK_KING) // king: -4
            .with(Pos::new(6, 7), BLACK_KING); // king on edge: -4
        // sum = 2 - 2 - 4 - 4 = -8, signed for Black = 8
        assert_eq!(board_value(&board, Side::Black), 8);
        // Red sees no bonuses on its side: 2 - 1 - 2 - 2 = -3
        assert_eq!(board_value(&board, Side::Red), -3);
    }
}
