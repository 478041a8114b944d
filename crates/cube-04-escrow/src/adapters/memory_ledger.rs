//! In-Memory Ledger Adapter
//!
//! Implements the `Ledger` port with a serialized, version-checked commit.
//! Used by the test suite and for local runs; a real deployment commits
//! through the host chain instead.

use crate::domain::LedgerError;
use crate::ports::outbound::{Ledger, LedgerAccount, LedgerBatch, LedgerOp};
use parking_lot::RwLock;
use sha2::{Digest, Sha256};
use shared_types::{Address, Lamports, TxSignature};
use std::collections::BTreeMap;
use tracing::debug;

/// Storage deposit charged when an account is created.
///
/// `deposit = (overhead_bytes + data_len) × lamports_per_byte`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DepositSchedule {
    /// Fixed per-account overhead in bytes.
    pub overhead_bytes: u64,
    /// Lamports charged per byte.
    pub lamports_per_byte: Lamports,
}

impl DepositSchedule {
    /// No deposits at all.
    pub const FREE: Self = Self {
        overhead_bytes: 0,
        lamports_per_byte: 0,
    };

    /// Deposit for an account holding `data_len` bytes, capped at `Lamports::MAX`.
    pub fn deposit_for(&self, data_len: usize) -> Lamports {
        self.overhead_bytes
            .saturating_add(data_len as u64)
            .saturating_mul(self.lamports_per_byte)
    }
}

impl Default for DepositSchedule {
    /// The host's rent-exempt minimum.
    fn default() -> Self {
        Self {
            overhead_bytes: 128,
            lamports_per_byte: 6_960,
        }
    }
}

#[derive(Default)]
struct LedgerState {
    accounts: BTreeMap<Address, LedgerAccount>,
    next_version: u64,
    transactions: u64,
}

impl LedgerState {
    fn bump_version(&mut self) -> u64 {
        self.next_version += 1;
        self.next_version
    }
}

/// Copy-on-write view of the accounts touched by one batch.
struct Staged<'a> {
    base: &'a BTreeMap<Address, LedgerAccount>,
    changes: BTreeMap<Address, Option<LedgerAccount>>,
}

impl<'a> Staged<'a> {
    fn new(base: &'a BTreeMap<Address, LedgerAccount>) -> Self {
        Self {
            base,
            changes: BTreeMap::new(),
        }
    }

    fn get(&self, address: &Address) -> Option<LedgerAccount> {
        match self.changes.get(address) {
            Some(change) => change.clone(),
            None => self.base.get(address).cloned(),
        }
    }

    fn put(&mut self, address: Address, account: LedgerAccount) {
        self.changes.insert(address, Some(account));
    }

    fn remove(&mut self, address: Address) {
        self.changes.insert(address, None);
    }

    fn debit(&mut self, address: Address, amount: Lamports) -> Result<(), LedgerError> {
        let mut account = self
            .get(&address)
            .ok_or(LedgerError::AccountNotFound(address))?;
        if account.lamports < amount {
            return Err(LedgerError::InsufficientFunds {
                address,
                needed: amount,
                available: account.lamports,
            });
        }
        account.lamports -= amount;
        self.put(address, account);
        Ok(())
    }

    fn credit(&mut self, address: Address, amount: Lamports) -> Result<(), LedgerError> {
        let mut account = self.get(&address).unwrap_or(LedgerAccount {
            lamports: 0,
            data: Vec::new(),
            version: 0,
        });
        account.lamports = account
            .lamports
            .checked_add(amount)
            .ok_or_else(|| LedgerError::Host(format!("balance overflow on {address}")))?;
        self.put(address, account);
        Ok(())
    }
}

/// In-memory ledger for tests and local runs.
pub struct InMemoryLedger {
    state: RwLock<LedgerState>,
    schedule: DepositSchedule,
}

impl InMemoryLedger {
    /// Ledger charging the default deposit schedule.
    pub fn new() -> Self {
        Self::with_schedule(DepositSchedule::default())
    }

    /// Ledger charging `schedule` on account creation.
    pub fn with_schedule(schedule: DepositSchedule) -> Self {
        Self {
            state: RwLock::new(LedgerState::default()),
            schedule,
        }
    }

    /// Deposit schedule in force.
    pub fn schedule(&self) -> DepositSchedule {
        self.schedule
    }

    /// Credit a wallet out of thin air.
    pub fn fund(&self, address: Address, amount: Lamports) {
        let mut state = self.state.write();
        let version = state.bump_version();
        let account = state.accounts.entry(address).or_insert(LedgerAccount {
            lamports: 0,
            data: Vec::new(),
            version,
        });
        account.lamports = account.lamports.saturating_add(amount);
        account.version = version;
    }

    /// Balance of an account, zero if absent.
    pub fn balance(&self, address: &Address) -> Lamports {
        self.state
            .read()
            .accounts
            .get(address)
            .map_or(0, |account| account.lamports)
    }

    /// Number of committed batches.
    pub fn transaction_count(&self) -> u64 {
        self.state.read().transactions
    }

    /// Number of live accounts, wallets included.
    pub fn account_count(&self) -> usize {
        self.state.read().accounts.len()
    }

    /// Sum of every balance.
    pub fn total_lamports(&self) -> Lamports {
        self.state
            .read()
            .accounts
            .values()
            .map(|account| account.lamports)
            .sum()
    }

    fn check_version(
        accounts: &BTreeMap<Address, LedgerAccount>,
        address: Address,
        expected: u64,
    ) -> Result<(), LedgerError> {
        let actual = accounts
            .get(&address)
            .ok_or(LedgerError::AccountNotFound(address))?
            .version;
        if actual != expected {
            return Err(LedgerError::StaleAccount {
                address,
                expected,
                actual,
            });
        }
        Ok(())
    }

    fn apply(&self, staged: &mut Staged<'_>, op: &LedgerOp) -> Result<(), LedgerError> {
        match op {
            LedgerOp::Create {
                address,
                payer,
                data,
            } => {
                let held = match staged.get(address) {
                    Some(account) if !account.data.is_empty() => {
                        return Err(LedgerError::AccountExists(*address));
                    }
                    Some(account) => account.lamports,
                    None => 0,
                };
                // A funded address without data is taken over; the payer
                // only tops it up to the deposit.
                let shortfall = self.schedule.deposit_for(data.len()).saturating_sub(held);
                staged.debit(*payer, shortfall)?;
                let lamports = staged
                    .get(address)
                    .map_or(0, |account| account.lamports)
                    .saturating_add(shortfall);
                staged.put(
                    *address,
                    LedgerAccount {
                        lamports,
                        data: data.clone(),
                        version: 0,
                    },
                );
            }
            LedgerOp::Write { address, data, .. } => {
                let mut account = staged
                    .get(address)
                    .ok_or(LedgerError::AccountNotFound(*address))?;
                account.data = data.clone();
                staged.put(*address, account);
            }
            LedgerOp::Transfer { from, to, amount } => {
                staged.debit(*from, *amount)?;
                staged.credit(*to, *amount)?;
            }
            LedgerOp::Close {
                address,
                beneficiary,
                ..
            } => {
                let account = staged
                    .get(address)
                    .ok_or(LedgerError::AccountNotFound(*address))?;
                staged.remove(*address);
                staged.credit(*beneficiary, account.lamports)?;
            }
        }
        Ok(())
    }
}

impl Default for InMemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

fn signature_for(sequence: u64, changed: &[Address]) -> TxSignature {
    let mut hasher = Sha256::new();
    hasher.update(sequence.to_le_bytes());
    for address in changed {
        hasher.update(address.as_bytes());
    }
    TxSignature(hasher.finalize().into())
}

impl Ledger for InMemoryLedger {
    fn get_account(&self, address: &Address) -> Result<Option<LedgerAccount>, LedgerError> {
        Ok(self.state.read().accounts.get(address).cloned())
    }

    fn accounts_with_prefix(
        &self,
        prefix: &[u8],
    ) -> Result<Vec<(Address, LedgerAccount)>, LedgerError> {
        Ok(self
            .state
            .read()
            .accounts
            .iter()
            .filter(|(_, account)| account.data.starts_with(prefix))
            .map(|(address, account)| (*address, account.clone()))
            .collect())
    }

    fn commit(&self, batch: LedgerBatch) -> Result<TxSignature, LedgerError> {
        let mut state = self.state.write();

        for op in batch.ops() {
            match op {
                LedgerOp::Write {
                    address,
                    expected_version,
                    ..
                }
                | LedgerOp::Close {
                    address,
                    expected_version,
                    ..
                } => Self::check_version(&state.accounts, *address, *expected_version)?,
                LedgerOp::Create { .. } | LedgerOp::Transfer { .. } => {}
            }
        }

        let mut staged = Staged::new(&state.accounts);
        for op in batch.ops() {
            self.apply(&mut staged, op)?;
        }
        let changes = staged.changes;

        let changed: Vec<Address> = changes.keys().copied().collect();
        for (address, change) in changes {
            match change {
                Some(mut account) => {
                    account.version = state.bump_version();
                    state.accounts.insert(address, account);
                }
                None => {
                    state.accounts.remove(&address);
                }
            }
        }
        state.transactions += 1;
        let signature = signature_for(state.transactions, &changed);

        debug!(
            ops = batch.len(),
            accounts = changed.len(),
            tx = %signature,
            "[ledger] committed batch"
        );
        Ok(signature)
    }
}
