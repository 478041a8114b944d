//! # Cube-04 Escrow
//!
//! Prize escrow for scrambled-cube challenges.
//!
//! **Subsystem ID:** 04  
//! **Architecture:** Hexagonal (DDD + Ports/Adapters)
//!
//! ## Purpose
//!
//! A sponsor locks a prize against a scrambled cube. The first solver to
//! submit a move sequence that solves it receives the prize, and the
//! challenge closes for good.
//!
//! ## Guarantees
//!
//! | Guarantee | Mechanism |
//! |-----------|-----------|
//! | No forged solves | Moves are replayed on the stored cube |
//! | No double payout | Close is version-checked in the same batch as the payout |
//! | Valid stored cubes | `CubeState` is validated on init and on decode |
//! | Deterministic addressing | Seeds go through `AddressDeriver` |
//!
//! ## Module Structure
//!
//! ```text
//! cube-04-escrow/
//! ├── domain/      # Accounts, layout, config, validation, errors
//! ├── ports/       # EscrowApi (inbound), Ledger (outbound)
//! ├── adapters/    # InMemoryLedger
//! └── service.rs   # EscrowService state machine
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

// Re-exports
pub use adapters::{DepositSchedule, InMemoryLedger};
pub use domain::{
    decode_account, encode_account, AccountKind, ChallengeAccount, ConfigError, EscrowConfig,
    EscrowError, LayoutError, LedgerError, ProgramAccount, SponsorAccount, WinnerAccount,
    CHALLENGE_ACCOUNT_LEN, SPONSOR_ACCOUNT_LEN, WINNER_ACCOUNT_LEN,
};
pub use ports::{
    EscrowApi, InitChallengeReceipt, InitChallengeRequest, Ledger, LedgerAccount, LedgerBatch,
    LedgerOp, ScrambledInitRequest, SolveReceipt, TrySolutionRequest,
};
pub use service::{EscrowService, ServiceStats};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::adapters::{DepositSchedule, InMemoryLedger};
    pub use crate::domain::{EscrowConfig, EscrowError};
    pub use crate::ports::{EscrowApi, InitChallengeRequest, Ledger, TrySolutionRequest};
    pub use crate::service::EscrowService;
}

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
