//! # Domain Module
//!
//! Move sequences and the notation that spells them.

pub mod errors;
pub mod parser;
pub mod sequence;

pub use errors::*;
pub use parser::*;
pub use sequence::*;
