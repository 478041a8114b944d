//! # Ports Layer (Hexagonal Architecture)

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
