//! # Domain Errors
//!
//! Notation parsing failures.

use thiserror::Error;

/// Move notation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NotationError {
    /// A token is not one of the 18 atomic moves.
    #[error("invalid move {token:?} at position {position}")]
    InvalidMove {
        /// The offending token text.
        token: String,
        /// 0-based token index in the input.
        position: usize,
    },

    /// The sequence is longer than the caller allows.
    #[error("sequence has {count} moves, limit is {max}")]
    TooManyMoves {
        /// Number of tokens in the input.
        count: usize,
        /// Configured limit.
        max: usize,
    },
}

impl NotationError {
    /// True for the per-token rejection.
    pub fn is_invalid_move(&self) -> bool {
        matches!(self, NotationError::InvalidMove { .. })
    }
}
