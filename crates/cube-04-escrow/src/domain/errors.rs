//! # Domain Errors
//!
//! Escrow error types.
//!
//! ## Error Classes
//!
//! | Class | Variants |
//! |-------|----------|
//! | Input validation | `InvalidMove`, name/description lengths, `ZeroPrize`, `MalformedCube`, `MoveSequenceTooLong` |
//! | Business rule | `UnsolvedCube`, `OrdinalMismatch` |
//! | Not found | `AccountNotFound` |
//! | Host failure | `Ledger`, `Derivation`, `CorruptAccount` |

use super::layout::LayoutError;
use cube_01_state_model::CubeError;
use cube_02_move_notation::NotationError;
use cube_03_address_derivation::DerivationError;
use shared_types::{Address, Lamports};
use thiserror::Error;

/// Base of the host's custom error number range.
pub const CUSTOM_ERROR_BASE: u32 = 6000;

/// Failures reported by the host ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Account does not exist (never created, or already closed).
    #[error("ledger account {0} not found")]
    AccountNotFound(Address),

    /// Create targeted an address that is already in use.
    #[error("ledger account {0} already exists")]
    AccountExists(Address),

    /// Account changed since the caller read it.
    #[error("ledger account {address} is stale: expected version {expected}, found {actual}")]
    StaleAccount {
        /// Account address.
        address: Address,
        /// Version the caller read.
        expected: u64,
        /// Current version.
        actual: u64,
    },

    /// Debit larger than the balance.
    #[error("account {address} has {available} lamports, needs {needed}")]
    InsufficientFunds {
        /// Debited account.
        address: Address,
        /// Lamports required.
        needed: Lamports,
        /// Lamports held.
        available: Lamports,
    },

    /// Any other host failure.
    #[error("ledger failure: {0}")]
    Host(String),
}

/// Escrow errors.
#[derive(Debug, Error)]
pub enum EscrowError {
    /// A solution token is not an atomic move.
    #[error("Invalid move {token:?} at position {position}")]
    InvalidMove {
        /// Offending token.
        token: String,
        /// 0-based token index.
        position: usize,
    },

    /// The submitted moves do not solve the cube.
    #[error("Cube is not solved")]
    UnsolvedCube,

    /// Sponsor name exceeds its limit.
    #[error("Sponsor name is {len} bytes, limit is {max}")]
    SponsorNameTooLong {
        /// Name length in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// Sponsor description exceeds its limit.
    #[error("Sponsor description is {len} bytes, limit is {max}")]
    SponsorDescTooLong {
        /// Description length in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// Winner name exceeds its limit.
    #[error("Winner name is {len} bytes, limit is {max}")]
    WinnerNameTooLong {
        /// Name length in bytes.
        len: usize,
        /// Configured limit.
        max: usize,
    },

    /// Submitted cube is not a reachable configuration.
    #[error("Malformed cube: {0}")]
    MalformedCube(#[from] CubeError),

    /// Challenges must lock a positive prize.
    #[error("Prize must be greater than zero")]
    ZeroPrize,

    /// The supplied challenge address is not the sponsor's next one.
    #[error("Challenge address {got} does not match next ordinal address {expected}")]
    OrdinalMismatch {
        /// Address for the sponsor's current ordinal.
        expected: Address,
        /// Address supplied by the caller.
        got: Address,
    },

    /// Solution longer than the configured limit.
    #[error("Solution has {count} moves, limit is {max}")]
    MoveSequenceTooLong {
        /// Number of tokens submitted.
        count: usize,
        /// Configured limit.
        max: usize,
    },

    /// No program account at this address.
    #[error("Account not found: {0}")]
    AccountNotFound(Address),

    /// Account data does not decode as the expected kind.
    #[error("Corrupt account {address}: {source}")]
    CorruptAccount {
        /// Account address.
        address: Address,
        /// Decoding failure.
        source: LayoutError,
    },

    /// The derivation primitive rejected a seed list.
    #[error("Address derivation failed: {0}")]
    Derivation(#[from] DerivationError),

    /// The host ledger rejected or failed a request.
    #[error("Ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

impl From<NotationError> for EscrowError {
    fn from(err: NotationError) -> Self {
        match err {
            NotationError::InvalidMove { token, position } => {
                EscrowError::InvalidMove { token, position }
            }
            NotationError::TooManyMoves { count, max } => {
                EscrowError::MoveSequenceTooLong { count, max }
            }
        }
    }
}

impl EscrowError {
    /// Stable string code.
    pub fn code(&self) -> &'static str {
        match self {
            EscrowError::InvalidMove { .. } => "InvalidMove",
            EscrowError::UnsolvedCube => "UnsolvedCube",
            EscrowError::SponsorNameTooLong { .. } => "SponsorNameTooLong",
            EscrowError::SponsorDescTooLong { .. } => "SponsorDescTooLong",
            EscrowError::WinnerNameTooLong { .. } => "WinnerNameTooLong",
            EscrowError::MalformedCube(_) => "MalformedCube",
            EscrowError::ZeroPrize => "ZeroPrize",
            EscrowError::OrdinalMismatch { .. } => "OrdinalMismatch",
            EscrowError::MoveSequenceTooLong { .. } => "MoveSequenceTooLong",
            EscrowError::AccountNotFound(_) => "AccountNotFound",
            EscrowError::CorruptAccount { .. } => "CorruptAccount",
            EscrowError::Derivation(_) => "DerivationFailed",
            EscrowError::Ledger(_) => "Ledger",
        }
    }

    /// Numeric code in the host's custom error range, for program errors.
    pub fn error_number(&self) -> Option<u32> {
        let offset = match self {
            EscrowError::InvalidMove { .. } => 0,
            EscrowError::UnsolvedCube => 1,
            EscrowError::SponsorNameTooLong { .. } => 2,
            EscrowError::SponsorDescTooLong { .. } => 3,
            EscrowError::WinnerNameTooLong { .. } => 4,
            EscrowError::MalformedCube(_) => 5,
            EscrowError::ZeroPrize => 6,
            EscrowError::OrdinalMismatch { .. } => 7,
            EscrowError::MoveSequenceTooLong { .. } => 8,
            _ => return None,
        };
        Some(CUSTOM_ERROR_BASE + offset)
    }

    /// Missing account, whether seen at read time or during commit.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            EscrowError::AccountNotFound(_)
                | EscrowError::Ledger(LedgerError::AccountNotFound(_))
        )
    }

    /// Commit lost a race against another transition.
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            EscrowError::Ledger(LedgerError::StaleAccount { .. })
                | EscrowError::Ledger(LedgerError::AccountExists(_))
        )
    }
}
