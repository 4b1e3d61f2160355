//! Error types for engine input validation.
//!
//! Terminal game states are not errors; see [`crate::engine::Outcome`].

use thiserror::Error;

use crate::board::Side;
use crate::constants::{MAX_PIECES, POINTS};

/// What is wrong with a board string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardDefect {
    /// Board string is not exactly [`POINTS`] characters long
    #[error("expected {expected} characters, found {0}", expected = POINTS)]
    Length(usize),

    /// Character outside `{w, b, x}` (case-insensitive)
    #[error("illegal character {found:?} at position {index}")]
    Character { index: usize, found: char },

    /// A side owns more than [`MAX_PIECES`] pieces
    #[error("{side} has {count} pieces, at most {max} allowed", max = MAX_PIECES)]
    TooManyPieces { side: Side, count: usize },
}

/// Errors that abort a run for one input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Fewer than the required inputs were supplied
    #[error(
        "invalid number of arguments: need input board path, output board path and depth (got {found})"
    )]
    InvalidArgumentCount { found: usize },

    /// The board failed validation
    #[error("invalid board: {0}")]
    InvalidBoard(#[from] BoardDefect),

    /// Depth is not a positive integer
    #[error("depth has to be a positive integer (got {0:?})")]
    InvalidDepth(String),
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
