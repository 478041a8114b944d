//! # Domain Errors
//!
//! Reasons a set of cube arrays is not a reachable cube configuration.

use thiserror::Error;

/// Which piece family an error refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PieceKind {
    /// The 8 corner pieces.
    Corner,
    /// The 12 edge pieces.
    Edge,
}

impl std::fmt::Display for PieceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PieceKind::Corner => f.write_str("corner"),
            PieceKind::Edge => f.write_str("edge"),
        }
    }
}

/// Cube validation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CubeError {
    /// An orientation value is outside {0,1,2} (corners) or {0,1} (edges).
    #[error("{kind} orientation at slot {slot} is {value}, must be below {modulus}")]
    OrientationOutOfRange {
        /// Piece family.
        kind: PieceKind,
        /// Offending slot.
        slot: usize,
        /// Offending value.
        value: u8,
        /// Number of orientation states.
        modulus: u8,
    },

    /// A permutation array repeats a piece or names one outside the range.
    #[error("{kind} permutation is not a permutation of 1..={size}")]
    NotAPermutation {
        /// Piece family.
        kind: PieceKind,
        /// Number of pieces.
        size: usize,
    },

    /// Corner orientations do not sum to 0 mod 3.
    #[error("corner twist sum is {sum}, must be divisible by 3")]
    CornerTwist {
        /// Sum of all corner orientations.
        sum: u32,
    },

    /// Edge orientations do not sum to 0 mod 2.
    #[error("edge flip sum is {sum}, must be even")]
    EdgeFlip {
        /// Sum of all edge orientations.
        sum: u32,
    },

    /// Corner and edge permutation parities differ.
    #[error("permutation parity mismatch: corners odd={corners_odd}, edges odd={edges_odd}")]
    ParityMismatch {
        /// Corner permutation is odd.
        corners_odd: bool,
        /// Edge permutation is odd.
        edges_odd: bool,
    },
}
