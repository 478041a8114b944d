//! SHA-256 Address Deriver
//!
//! Implements `AddressDeriver` as
//! `SHA-256(seed_0 ‖ … ‖ seed_n ‖ program_id ‖ "ProgramDerivedAddress")`.
//! No bump seed and no off-curve search: every seed list maps to exactly
//! one address.

use crate::domain::{DerivationError, MAX_SEEDS, MAX_SEED_LEN};
use crate::ports::AddressDeriver;
use sha2::{Digest, Sha256};
use shared_types::Address;
use tracing::trace;

const DERIVATION_MARKER: &[u8] = b"ProgramDerivedAddress";

/// Deterministic in-process stand-in for the host derivation primitive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Sha256Deriver {
    program_id: Address,
}

impl Sha256Deriver {
    /// Deriver scoped to `program_id`.
    pub const fn new(program_id: Address) -> Self {
        Self { program_id }
    }

    /// Program the derived addresses belong to.
    pub fn program_id(&self) -> Address {
        self.program_id
    }
}

impl Default for Sha256Deriver {
    /// Scoped to `SHA-256("cube-escrow")`.
    fn default() -> Self {
        let digest: [u8; 32] = Sha256::digest(b"cube-escrow").into();
        Self::new(Address::new(digest))
    }
}

impl AddressDeriver for Sha256Deriver {
    fn derive_address(&self, seeds: &[&[u8]]) -> Result<Address, DerivationError> {
        if seeds.len() > MAX_SEEDS {
            return Err(DerivationError::TooManySeeds {
                count: seeds.len(),
                max: MAX_SEEDS,
            });
        }
        if let Some((index, seed)) = seeds
            .iter()
            .enumerate()
            .find(|(_, seed)| seed.len() > MAX_SEED_LEN)
        {
            return Err(DerivationError::SeedTooLong {
                index,
                len: seed.len(),
                max: MAX_SEED_LEN,
            });
        }

        let mut hasher = Sha256::new();
        for seed in seeds {
            hasher.update(seed);
        }
        hasher.update(self.program_id.as_bytes());
        hasher.update(DERIVATION_MARKER);
        let address = Address::new(hasher.finalize().into());

        trace!(seeds = seeds.len(), address = %address.short(), "derived address");
        Ok(address)
    }
}
