//! # Domain Errors

use thiserror::Error;

/// Seed set rejected by the derivation primitive.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DerivationError {
    /// A single seed exceeds the per-seed byte limit.
    #[error("seed {index} is {len} bytes, limit is {max}")]
    SeedTooLong {
        /// Seed position.
        index: usize,
        /// Seed length in bytes.
        len: usize,
        /// Per-seed limit.
        max: usize,
    },

    /// More seeds than the primitive accepts.
    #[error("{count} seeds given, limit is {max}")]
    TooManySeeds {
        /// Number of seeds supplied.
        count: usize,
        /// Seed count limit.
        max: usize,
    },
}
