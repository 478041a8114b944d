//! # Ports Layer (Hexagonal Architecture)

pub mod outbound;

pub use outbound::AddressDeriver;
