//! Errors raised while reading boards and positions

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PositionError {
    #[error("expected 8 rows, found {0}")]
    RowCount(usize),

    #[error("row {row}: expected 8 cells, found {len}")]
    ColumnCount { row: usize, len: usize },

    #[error("cell ({row}, {col}) holds {value}, expected one of -2..=2")]
    InvalidCell { row: usize, col: usize, value: i8 },

    #[error("cell ({row}, {col}): unknown piece character '{ch}'")]
    UnknownCellChar { row: usize, col: usize, ch: char },

    #[error("unknown side '{0}' (expected red or black)")]
    UnknownSide(String),

    #[error("position text is missing the side-to-move line")]
    MissingSide,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("invalid position JSON: {0}")]
    Json(#[from] serde_json::Error),
}
