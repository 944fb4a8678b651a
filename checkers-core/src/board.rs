//! Checkers board geometry, sides and move application

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PositionError;
use crate::moves::Move;

/// Board width and height
pub const BOARD_SIZE: i8 = 8;

// ============================================================================
// CELL VALUES
// ============================================================================

pub const EMPTY: i8 = 0;
pub const RED_MAN: i8 = 1;
pub const BLACK_MAN: i8 = -1;
pub const RED_KING: i8 = 2;
pub const BLACK_KING: i8 = -2;

// ============================================================================
// SIDE
// ============================================================================

/// Player side. Red is +1 and advances toward row 7, Black is -1 and advances toward row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Black,
}

impl Side {
    /// +1 for Red, -1 for Black
    pub const fn sign(self) -> i8 {
        match self {
            Side::Red => 1,
            Side::Black => -1,
        }
    }

    pub const fn opponent(self) -> Self {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }

    /// Cell value of this side's man
    pub const fn man(self) -> i8 {
        self.sign()
    }

    /// Cell value of this side's king
    pub const fn king(self) -> i8 {
        2 * self.sign()
    }

    /// Row where this side's men are crowned
    pub const fn crown_row(self) -> i8 {
        match self {
            Side::Red => BOARD_SIZE - 1,
            Side::Black => 0,
        }
    }

    /// True if the cell holds one of this side's pieces
    pub fn owns(self, cell: i8) -> bool {
        cell * self.sign() > 0
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "red"),
            Side::Black => write!(f, "black"),
        }
    }
}

impl FromStr for Side {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "red" | "r" | "1" | "+1" => Ok(Side::Red),
            "black" | "b" | "-1" => Ok(Side::Black),
            other => Err(PositionError::UnknownSide(other.to_string())),
        }
    }
}

// ============================================================================
// POSITION ON THE GRID
// ============================================================================

/// Board square, row 0 is Red's home row
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pos {
    pub row: i8,
    pub col: i8,
}

impl Pos {
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    /// Check if this square is on the board
    pub fn is_valid(&self) -> bool {
        (0..BOARD_SIZE).contains(&self.row) && (0..BOARD_SIZE).contains(&self.col)
    }

    /// Dark squares, the only ones pieces ever occupy
    pub fn is_playable(&self) -> bool {
        self.is_valid() && (self.row + self.col) % 2 == 1
    }

    pub fn is_edge_column(&self) -> bool {
        self.col == 0 || self.col == BOARD_SIZE - 1
    }

    pub fn offset(&self, d_row: i8, d_col: i8) -> Pos {
        Pos::new(self.row + d_row, self.col + d_col)
    }

    /// Square jumped over when moving from `self` to `other`
    pub fn midpoint(&self, other: Pos) -> Pos {
        Pos::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col as u8) as char;
        write!(f, "{}{}", file, self.row + 1)
    }
}

// ============================================================================
// BOARD
// ============================================================================

/// 8x8 snapshot of cell values. Copying a board is cheap and every mutation
/// produces a new one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<i8>>", into = "Vec<Vec<i8>>")]
pub struct Board {
    cells: [[i8; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self { cells: [[EMPTY; 8]; 8] }
    }

    /// Standard opening: 12 men per side on the dark squares of the first three rows
    pub fn initial() -> Self {
        let mut board = Self::empty();
        for pos in Self::squares().filter(Pos::is_playable) {
            if pos.row <= 2 {
                board.set(pos, RED_MAN);
            } else if pos.row >= 5 {
                board.set(pos, BLACK_MAN);
            }
        }
        board
    }

    /// Build from raw cell values. Values outside {-2..=2} are not checked here.
    pub const fn from_cells(cells: [[i8; 8]; 8]) -> Self {
        Self { cells }
    }

    pub fn cells(&self) -> &[[i8; 8]; 8] {
        &self.cells
    }

    pub fn get(&self, pos: Pos) -> i8 {
        debug_assert!(pos.is_valid(), "off-board read at {:?}", pos);
        self.cells[pos.row as usize][pos.col as usize]
    }

    pub fn set(&mut self, pos: Pos, value: i8) {
        debug_assert!(pos.is_valid(), "off-board write at {:?}", pos);
        self.cells[pos.row as usize][pos.col as usize] = value;
    }

    /// Builder-style placement, handy for setting up positions
    pub fn with(mut self, pos: Pos, value: i8) -> Self {
        self.set(pos, value);
        self
    }

    /// All 64 squares in row-major order
    pub fn squares() -> impl Iterator<Item = Pos> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Pos::new(row, col)))
    }

    /// Every square with its cell value, row-major
    pub fn iter(&self) -> impl Iterator<Item = (Pos, i8)> + '_ {
        Self::squares().map(move |pos| (pos, self.get(pos)))
    }

    /// Pieces (men and kings) belonging to `side`
    pub fn count_pieces(&self, side: Side) -> usize {
        self.iter().filter(|&(_, cell)| side.owns(cell)).count()
    }

    pub fn total_pieces(&self) -> usize {
        self.iter().filter(|&(_, cell)| cell != EMPTY).count()
    }

    /// Return the board after `side` plays `mv`. `None` yields an unchanged copy.
    ///
    /// The piece on the first hop is carried along the hop sequence. Any hop on
    /// the mover's crown row turns it into a king, and a hop spanning two rows
    /// clears the jumped square. Legality is not checked.
    pub fn apply_move(&self, mv: Option<&Move>, side: Side) -> Board {
        let mut next = *self;
        let Some(mv) = mv else {
            return next;
        };
        let Some(&origin) = mv.hops().first() else {
            return next;
        };

        let mut piece = next.get(origin);
        let mut last = origin;
        for &hop in mv.hops() {
            if hop.row == side.crown_row() {
                piece = side.king();
            }
            next.set(hop, piece);
            next.set(last, EMPTY);
            if (last.row - hop.row).abs() == 2 {
                next.set(last.midpoint(hop), EMPTY);
            }
            last = hop;
        }
        next
    }
}

/// Free-function form of [`Board::apply_move`]
pub fn apply_move(board: &Board, mv: Option<&Move>, side: Side) -> Board {
    board.apply_move(mv, side)
}

fn cell_char(cell: i8) -> char {
    match cell {
        RED_MAN => 'r',
        RED_KING => 'R',
        BLACK_MAN => 'b',
        BLACK_KING => 'B',
        _ => '.',
    }
}

fn char_cell(ch: char) -> Option<i8> {
    match ch {
        '.' | '-' | '_' => Some(EMPTY),
        'r' => Some(RED_MAN),
        'R' => Some(RED_KING),
        'b' => Some(BLACK_MAN),
        'B' => Some(BLACK_KING),
        _ => None,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: String = row.iter().map(|&cell| cell_char(cell)).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = PositionError;

    /// Parse 8 lines of 8 cell characters, row 0 first. Blank lines and
    /// whitespace inside lines are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<Vec<char>> = s
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        if rows.len() != BOARD_SIZE as usize {
            return Err(PositionError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, chars) in rows.iter().enumerate() {
            if chars.len() != BOARD_SIZE as usize {
                return Err(PositionError::ColumnCount { row, len: chars.len() });
            }
            for (col, &ch) in chars.iter().enumerate() {
                let cell = char_cell(ch).ok_or(PositionError::UnknownCellChar { row, col, ch })?;
                board.cells[row][col] = cell;
            }
        }
        Ok(board)
    }
}

impl TryFrom<Vec<Vec<i8>>> for Board {
    type Error = PositionError;

    fn try_from(rows: Vec<Vec<i8>>) -> Result<Self, Self::Error> {
        if rows.len() != BOARD_SIZE as usize {
            return Err(PositionError::RowCount(rows.len()));
        }

        let mut board = Board::empty();
        for (row, values) in rows.iter().enumerate() {
            if values.len() != BOARD_SIZE as usize {
                return Err(PositionError::ColumnCount { row, len: values.len() });
            }
            for (col, &value) in values.iter().enumerate() {
                if !(BLACK_KING..=RED_KING).contains(&value) {
                    return Err(PositionError::InvalidCell { row, col, value });
                }
                board.cells[row][col] = value;
            }
        }
        Ok(board)
    }
}

impl From<Board> for Vec<Vec<i8>> {
    fn from(board: Board) -> Self {
        board.cells.iter().map(|row| row.to_vec()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();
        assert_eq!(board.count_pieces(Side::Red), 12);
        assert_eq!(board.count_pieces(Side::Black), 12);
        assert_eq!(board.total_pieces(), 24);
        assert_eq!(board.get(Pos::new(0, 1)), RED_MAN);
        assert_eq!(board.get(Pos::new(7, 0)), BLACK_MAN);
        assert_eq!(board.get(Pos::new(0, 0)), EMPTY);
        assert_eq!(board.get(Pos::new(3, 2)), EMPTY);
    }

    #[test]
    fn test_pos_geometry() {
        assert!(Pos::new(0, 1).is_playable());
        assert!(!Pos::new(0, 0).is_playable());
        assert!(!Pos::new(8, 1).is_valid());
        assert!(!Pos::new(-1, 0).is_valid());
        assert!(Pos::new(3, 7).is_edge_column());
        assert_eq!(Pos::new(2, 1).midpoint(Pos::new(4, 3)), Pos::new(3, 2));
        assert_eq!(Pos::new(2, 1).to_string(), "b3");
    }

    #[test]
    fn test_side_parsing() {
        assert_eq!("red".parse::<Side>().unwrap(), Side::Red);
        assert_eq!("-1".parse::<Side>().unwrap(), Side::Black);
        assert!("green".parse::<Side>().is_err());
        assert_eq!(Side::Black.opponent(), Side::Red);
        assert!(Side::Black.owns(BLACK_KING));
        assert!(!Side::Black.owns(RED_MAN));
    }

    #[test]
    fn test_simple_step_leaves_input_untouched() {
        let board = Board::initial();
        let mv = Move::step(Pos::new(2, 1), Pos::new(3, 2));
        let next = board.apply_move(Some(&mv), Side::Red);

        assert_eq!(next.get(Pos::new(2, 1)), EMPTY);
        assert_eq!(next.get(Pos::new(3, 2)), RED_MAN);
        assert_eq!(board, Board::initial());
        assert_eq!(next, board.apply_move(Some(&mv), Side::Red));
    }

    #[test]
    fn test_capture_clears_midpoint() {
        let board = Board::empty()
            .with(Pos::new(2, 1), RED_MAN)
            .with(Pos::new(3, 2), BLACK_MAN)
            .with(Pos::new(5, 4), BLACK_MAN);
        let mv = Move::new(vec![Pos::new(2, 1), Pos::new(4, 3), Pos::new(6, 5)]);
        let next = board.apply_move(Some(&mv), Side::Red);

        assert_eq!(next.get(Pos::new(3, 2)), EMPTY);
        assert_eq!(next.get(Pos::new(5, 4)), EMPTY);
        assert_eq!(next.get(Pos::new(6, 5)), RED_MAN);
        assert_eq!(next.total_pieces(), 1);
    }

    #[test]
    fn test_promotion_on_crown_row() {
        let red = Board::empty().with(Pos::new(6, 1), RED_MAN);
        let next = red.apply_move(Some(&Move::step(Pos::new(6, 1), Pos::new(7, 2))), Side::Red);
        assert_eq!(next.get(Pos::new(7, 2)), RED_KING);

        let black = Board::empty().with(Pos::new(1, 2), BLACK_MAN);
        let next = black.apply_move(Some(&Move::step(Pos::new(1, 2), Pos::new(0, 1))), Side::Black);
        assert_eq!(next.get(Pos::new(0, 1)), BLACK_KING);
    }

    #[test]
    fn test_no_move_is_a_copy() {
        let board = Board::initial();
        assert_eq!(board.apply_move(None, Side::Black), board);
    }

    #[test]
    fn test_text_round_trip() {
        let board = Board::initial().with(Pos::new(3, 2), RED_KING);
        let parsed: Board = board.to_string().parse().unwrap();
        assert_eq!(parsed, board);
    }

    #[test]
    fn test_text_errors() {
        assert!(matches!("r.".parse::<Board>(), Err(PositionError::RowCount(1))));
        let bad = ".r......\n".repeat(7) + "x.......\n";
        assert!(matches!(
            bad.parse::<Board>(),
            Err(PositionError::UnknownCellChar { row: 7, col: 0, ch: 'x' })
        ));
    }

    #[test]
    fn test_json_rejects_bad_cells() {
        let mut rows: Vec<Vec<i8>> = Board::empty().into();
        rows[4][3] = 3;
        let json = serde_json::to_string(&rows).unwrap();
        assert!(serde_json::from_str::<Board>(&json).is_err());

        let json = serde_json::to_string(&Board::initial()).unwrap();
        assert_eq!(serde_json::from_str::<Board>(&json).unwrap(), Board::initial());
    }
}
