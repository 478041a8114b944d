//! # Domain Module
//!
//! Seed layouts and derivation errors.

pub mod errors;
pub mod seeds;

pub use errors::*;
pub use seeds::*;
