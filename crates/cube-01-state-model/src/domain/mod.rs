//! # Domain Module
//!
//! Cube configurations, the 18 atomic moves and the reachability rules.

pub mod cube;
pub mod errors;
pub mod invariants;
pub mod move_table;
pub mod moves;

pub use cube::*;
pub use errors::*;
pub use invariants::*;
pub use move_table::{CORNERS, EDGES};
pub use moves::*;
