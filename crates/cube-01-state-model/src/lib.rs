//! # Cube-01 State Model
//!
//! The 3x3x3 cube as a group element: a validated configuration plus the
//! 18 atomic moves that act on it.
//!
//! **Subsystem ID:** 01  
//! **Architecture:** Pure domain (no ports, no I/O)
//!
//! ## Representation
//!
//! | Array | Length | Values |
//! |-------|--------|--------|
//! | `co` | 8 | corner orientation, 0..3 |
//! | `cp` | 8 | corner permutation, 1..=8 |
//! | `eo` | 12 | edge orientation, 0..2 |
//! | `ep` | 12 | edge permutation, 1..=12 |
//!
//! A [`CubeState`] can only be built from arrays that describe a physically
//! reachable cube, so applying moves never fails.
//!
//! ## Module Structure
//!
//! ```text
//! cube-01-state-model/
//! └── domain/   # CubeState, Move, move table, invariants, errors
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

// Re-exports
pub use domain::{
    check_all_invariants, invariant_orientation, invariant_parity, invariant_permutation,
    permutation_is_odd, CubeError, CubeState, Face, Move, PieceKind, RawCube, Turn, CORNERS,
    EDGES,
};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::domain::{CubeError, CubeState, Face, Move, RawCube, Turn};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
