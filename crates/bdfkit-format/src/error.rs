//! BDF reading and writing errors

use bdfkit_core::FontError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, BdfError>;

#[derive(Debug, Error)]
pub enum BdfError {
    #[error("line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("unexpected end of file")]
    UnexpectedEof,

    #[error(transparent)]
    Font(#[from] FontError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl BdfError {
    pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
        BdfError::Parse {
            line,
            message: message.into(),
        }
    }
}
