//! # Adapters Layer (Hexagonal Architecture)
//!
//! Implements the outbound ledger port.

mod memory_ledger;

pub use memory_ledger::{DepositSchedule, InMemoryLedger};
