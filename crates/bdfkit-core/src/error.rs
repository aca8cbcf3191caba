//! Error types for bdfkit glyphs and fonts

use thiserror::Error;

use crate::types::Codepoint;

pub type Result<T> = std::result::Result<T, FontError>;

/// Errors raised while building or registering glyphs
///
/// Both variants indicate bad data or a programming error, never a routine
/// outcome, so callers propagate them instead of counting them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FontError {
    #[error("A glyph already exists for codepoint U+{0:04X}")]
    DuplicateCodepoint(Codepoint),

    #[error("Invalid bitmap: {0}")]
    Bitmap(#[from] BitmapError),
}

/// Bitmap invariant violations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BitmapError {
    #[error("expected {expected} rows, got {actual}")]
    RowCount { expected: usize, actual: usize },

    #[error("row {row} is {actual} bits wide, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        actual: usize,
    },

    #[error("row {row} has pixels beyond the {width}-pixel bounding box")]
    RowOverflow { row: usize, width: u32 },

    #[error("row {row}: {value:?} is not a hex bitmap row")]
    InvalidHex { row: usize, value: String },
}
