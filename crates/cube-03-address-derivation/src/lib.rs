//! # Cube-03 Address Derivation
//!
//! Deterministic, collision-resistant addresses for sponsor, challenge and
//! winner accounts.
//!
//! **Subsystem ID:** 03  
//! **Architecture:** Hexagonal (domain + outbound port + adapter)
//!
//! ## Derivation Chain
//!
//! ```text
//! (owner, name) ──SPONSOR──► sponsor_data ──CUBE, ordinal──► challenge
//! (solver, name) ──WINNER──► winner
//! ```
//!
//! The core only builds seed lists. The seeds-to-address primitive belongs
//! to the host and sits behind [`AddressDeriver`]; [`Sha256Deriver`] is the
//! in-process implementation.
//!
//! ## Module Structure
//!
//! ```text
//! cube-03-address-derivation/
//! ├── domain/       # Seed layouts, errors
//! ├── algorithms/   # derive_* helpers
//! ├── ports/        # AddressDeriver
//! └── adapters/     # Sha256Deriver
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod algorithms;
pub mod domain;
pub mod ports;

// Re-exports
pub use adapters::Sha256Deriver;
pub use algorithms::{
    derive_challenge_address, derive_sponsor_address, derive_winner_address,
    nth_challenge_address,
};
pub use domain::{
    DerivationError, SeedSet, CHALLENGE_SEED, MAX_SEEDS, MAX_SEED_LEN, SPONSOR_SEED, WINNER_SEED,
};
pub use ports::AddressDeriver;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::adapters::Sha256Deriver;
    pub use crate::algorithms::*;
    pub use crate::domain::DerivationError;
    pub use crate::ports::AddressDeriver;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
