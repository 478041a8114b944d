//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound derivation port.

mod sha256_deriver;

pub use sha256_deriver::Sha256Deriver;
