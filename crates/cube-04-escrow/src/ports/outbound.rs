//! # Outbound Ports
//!
//! The host ledger: account reads and atomic batch commits.

use crate::domain::LedgerError;
use shared_types::{Address, Lamports, TxSignature};

/// Snapshot of one ledger account.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LedgerAccount {
    /// Balance, including any storage deposit.
    pub lamports: Lamports,
    /// Program data (empty for plain wallets).
    pub data: Vec<u8>,
    /// Changes whenever the account changes.
    pub version: u64,
}

/// One state change inside a batch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LedgerOp {
    /// Create a data account; `payer` funds its storage deposit.
    ///
    /// An address holding lamports but no data is taken over, keeping its
    /// balance; the payer covers only what is missing from the deposit.
    Create {
        /// New account address; must hold no data.
        address: Address,
        /// Wallet debited for the deposit.
        payer: Address,
        /// Initial data.
        data: Vec<u8>,
    },
    /// Replace the data of an existing account.
    Write {
        /// Account address.
        address: Address,
        /// Version the caller read.
        expected_version: u64,
        /// New data, same length as the old.
        data: Vec<u8>,
    },
    /// Move lamports; the destination is created as a wallet if absent.
    Transfer {
        /// Debited account.
        from: Address,
        /// Credited account.
        to: Address,
        /// Amount.
        amount: Lamports,
    },
    /// Delete an account, sending its remaining lamports to `beneficiary`.
    Close {
        /// Account address.
        address: Address,
        /// Version the caller read.
        expected_version: u64,
        /// Wallet credited with the remaining balance.
        beneficiary: Address,
    },
}

/// An ordered list of ops applied all-or-nothing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LedgerBatch {
    ops: Vec<LedgerOp>,
}

impl LedgerBatch {
    /// Empty batch.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a create.
    pub fn create(mut self, address: Address, payer: Address, data: Vec<u8>) -> Self {
        self.ops.push(LedgerOp::Create {
            address,
            payer,
            data,
        });
        self
    }

    /// Append a version-checked write.
    pub fn write(mut self, address: Address, expected_version: u64, data: Vec<u8>) -> Self {
        self.ops.push(LedgerOp::Write {
            address,
            expected_version,
            data,
        });
        self
    }

    /// Append a transfer.
    pub fn transfer(mut self, from: Address, to: Address, amount: Lamports) -> Self {
        self.ops.push(LedgerOp::Transfer { from, to, amount });
        self
    }

    /// Append a version-checked close.
    pub fn close(mut self, address: Address, expected_version: u64, beneficiary: Address) -> Self {
        self.ops.push(LedgerOp::Close {
            address,
            expected_version,
            beneficiary,
        });
        self
    }

    /// Ops in application order.
    pub fn ops(&self) -> &[LedgerOp] {
        &self.ops
    }

    /// Number of ops.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// True when the batch has no ops.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }
}

/// Host ledger port.
///
/// `commit` must be serialized and atomic: every `expected_version` is
/// checked against the state before the batch, and either every op lands
/// or none does.
pub trait Ledger: Send + Sync {
    /// Current state of an account, `None` if absent.
    fn get_account(&self, address: &Address) -> Result<Option<LedgerAccount>, LedgerError>;

    /// Every account whose data starts with `prefix`.
    fn accounts_with_prefix(
        &self,
        prefix: &[u8],
    ) -> Result<Vec<(Address, LedgerAccount)>, LedgerError>;

    /// Apply a batch atomically.
    fn commit(&self, batch: LedgerBatch) -> Result<TxSignature, LedgerError>;
}

impl<T: Ledger + ?Sized> Ledger for std::sync::Arc<T> {
    fn get_account(&self, address: &Address) -> Result<Option<LedgerAccount>, LedgerError> {
        (**self).get_account(address)
    }

    fn accounts_with_prefix(
        &self,
        prefix: &[u8],
    ) -> Result<Vec<(Address, LedgerAccount)>, LedgerError> {
        (**self).accounts_with_prefix(prefix)
    }

    fn commit(&self, batch: LedgerBatch) -> Result<TxSignature, LedgerError> {
        (**self).commit(batch)
    }
}
