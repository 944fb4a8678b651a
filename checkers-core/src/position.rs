//! Position - a board plus the side to move, loadable from files

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{Board, Side};
use crate::error::PositionError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub side: Side,
    pub board: Board,
}

impl Position {
    pub fn new(board: Board, side: Side) -> Self {
        Self {
            name: None,
            side,
            board,
        }
    }

    /// Standard opening, Red to move
    pub fn initial() -> Self {
        Self {
            name: Some("initial".to_string()),
            side: Side::Red,
            board: Board::initial(),
        }
    }

    /// Load from a JSON or text file. JSON is detected by a leading `{`.
    pub fn load(path: &Path) -> Result<Self, PositionError> {
        let content = std::fs::read_to_string(path)?;

        let mut position = if content.trim_start().starts_with('{') {
            Self::from_json(&content)?
        } else {
            Self::from_text(&content)?
        };

        if position.name.is_none() {
            position.name = path.file_stem().map(|s| s.to_string_lossy().into_owned());
        }
        Ok(position)
    }

    pub fn from_json(json: &str) -> Result<Self, PositionError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PositionError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse the text form: a side line (`red` or `black`) followed by the board.
    /// Lines starting with `#` are comments.
    pub fn from_text(text: &str) -> Result<Self, PositionError> {
        let mut lines = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'));

        let side: Side = lines.next().ok_or(PositionError::MissingSide)?.parse()?;
        let board: Board = lines.collect::<Vec<_>>().join("\n").parse()?;

        Ok(Self::new(board, side))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Pos, BLACK_KING, RED_MAN};

    const ENDGAME: &str = "
        # two pieces left
        black
        ........
        ..r.....
        ........
        ........
        ........
        ........
        ........
        ......B.
    ";

    #[test]
    fn test_from_text() {
        let position = Position::from_text(ENDGAME).unwrap();
        assert_eq!(position.side, Side::Black);
        assert_eq!(position.board.get(Pos::new(1, 2)), RED_MAN);
        assert_eq!(position.board.get(Pos::new(7, 6)), BLACK_KING);
        assert_eq!(position.board.total_pieces(), 2);
    }

    #[test]
    fn test_from_text_requires_side() {
        assert!(matches!(Position::from_text(""), Err(PositionError::MissingSide)));
        assert!(matches!(
            Position::from_text("purple\n........"),
            Err(PositionError::UnknownSide(_))
        ));
    }

    #[test]
    fn test_json_round_trip() {
        let position = Position::initial();
        let json = position.to_json().unwrap();
        assert_eq!(Position::from_json(&json).unwrap(), position);
    }

    #[test]
    fn test_json_numeric_board() {
        let mut rows = vec![vec![0i8; 8]; 8];
        rows[2][1] = 1;
        rows[5][4] = -2;
        let json = serde_json::json!({ "side": "red", "board": rows }).to_string();

        let position = Position::from_json(&json).unwrap();
        assert_eq!(position.side, Side::Red);
        assert_eq!(position.board.get(Pos::new(5, 4)), BLACK_KING);
        assert!(position.name.is_none());
    }

    #[test]
    fn test_load_text_file() {
        let path = std::env::temp_dir().join(format!("checkers-endgame-{}.txt", std::process::id()));
        std::fs::write(&path, ENDGAME).unwrap();

        let position = Position::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(position.side, Side::Black);
        assert!(position.name.unwrap().starts_with("checkers-endgame"));
    }
}
