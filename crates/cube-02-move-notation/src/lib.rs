//! # Cube-02 Move Notation
//!
//! Standard face-turn notation (`R`, `U'`, `F2`) to and from move
//! sequences.
//!
//! **Subsystem ID:** 02  
//! **Architecture:** Pure domain
//!
//! ```text
//! "R U R' U'"  ──parse_moves──►  MoveSequence  ──Display──►  "R U R' U'"
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

// Re-exports
pub use domain::{parse_move, parse_moves, parse_moves_bounded, MoveSequence, NotationError};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::domain::{parse_moves, parse_moves_bounded, MoveSequence, NotationError};
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
