//! # Algorithms
//!
//! Account address derivation over the deriver port.

pub mod derivation;

pub use derivation::*;
