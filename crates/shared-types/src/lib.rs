//! # Shared Types Crate
//!
//! Identity and value primitives used by every cube-escrow crate.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Address`, `TxSignature` and `Lamports` are
//!   defined once here and re-used by the derivation, escrow and test crates.
//! - **Fixed Width**: addresses are always 32 bytes so that they can be used
//!   verbatim as derivation seeds and inside fixed-layout accounts.

pub mod entities;
pub mod errors;

pub use entities::*;
pub use errors::*;
