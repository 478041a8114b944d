//! # Error Types
//!
//! Errors raised while handling shared primitives.

use thiserror::Error;

/// Errors from parsing or constructing an [`Address`](crate::Address).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    /// Input was not 32 bytes long.
    #[error("Invalid address length: expected 32 bytes, got {got}")]
    InvalidLength { got: usize },

    /// Input was not valid hex.
    #[error("Invalid address hex: {0}")]
    InvalidHex(String),
}
