use thiserror::Error;

use crate::palette::Mode;

/// Reason why a data matrix and a baseline matrix cannot be paired.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("data and baseline matrices have different number of rows \
             ({data} and {baseline})")]
    RowCountMismatch { data: usize, baseline: usize },

    #[error("data matrix is not rectangular (row {row} has {found} \
             columns, expected {expected})")]
    RaggedDataRow { row: usize, expected: usize, found: usize },

    #[error("column length mismatch in baseline matrix (row {row} has \
             {found} columns, expected {expected})")]
    RaggedBaselineRow { row: usize, expected: usize, found: usize },
}

/// Error returned when a string is not a recognized color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseColorError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color length {0} (expected 3 or 6 digits)")]
    InvalidLength(usize),

    #[error("invalid hex digits")]
    InvalidHex,
}

/// Any failure of a mapping pass.  All of them are detected before
/// the first cell is colored.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    #[error(transparent)]
    Shape(#[from] ShapeError),

    #[error("unsupported mode: {0}")]
    UnsupportedMode(String),

    #[error("baseline cell ({row}, {col}) does not fit {mode} mode")]
    BaselineShape { row: usize, col: usize, mode: Mode },

    #[error("baseline cell ({row}, {col}) has spread {spread} \
             (must be finite and positive)")]
    InvalidSpread { row: usize, col: usize, spread: f64 },

    #[error("invalid {option}: {source}")]
    InvalidColor { option: &'static str, source: ParseColorError },
}
