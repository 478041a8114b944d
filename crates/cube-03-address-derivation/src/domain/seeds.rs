//! # Seed Layouts
//!
//! Byte-exact seed lists for every derived account.
//!
//! | Account | Seeds |
//! |---------|-------|
//! | Sponsor | `"SPONSOR"`, owner (32), name (UTF-8) |
//! | Challenge | `"CUBE"`, sponsor-data address (32), ordinal (u64 LE) |
//! | Winner | `"WINNER"`, solver (32), name (UTF-8) |

use shared_types::Address;

/// Tag seed for sponsor accounts.
pub const SPONSOR_SEED: &[u8] = b"SPONSOR";
/// Tag seed for challenge accounts.
pub const CHALLENGE_SEED: &[u8] = b"CUBE";
/// Tag seed for winner accounts.
pub const WINNER_SEED: &[u8] = b"WINNER";

/// Maximum number of seeds the host primitive accepts.
pub const MAX_SEEDS: usize = 16;
/// Maximum length of a single seed in bytes.
pub const MAX_SEED_LEN: usize = 32;

/// An owned, ordered list of seeds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeedSet {
    seeds: Vec<Vec<u8>>,
}

impl SeedSet {
    /// Seeds of the sponsor aggregate for `(owner, name)`.
    pub fn sponsor(owner: &Address, name: &str) -> Self {
        Self {
            seeds: vec![
                SPONSOR_SEED.to_vec(),
                owner.as_bytes().to_vec(),
                name.as_bytes().to_vec(),
            ],
        }
    }

    /// Seeds of the `ordinal`-th challenge under a sponsor account.
    pub fn challenge(sponsor_data: &Address, ordinal: u64) -> Self {
        Self {
            seeds: vec![
                CHALLENGE_SEED.to_vec(),
                sponsor_data.as_bytes().to_vec(),
                ordinal.to_le_bytes().to_vec(),
            ],
        }
    }

    /// Seeds of the winner aggregate for `(solver, name)`.
    pub fn winner(solver: &Address, name: &str) -> Self {
        Self {
            seeds: vec![
                WINNER_SEED.to_vec(),
                solver.as_bytes().to_vec(),
                name.as_bytes().to_vec(),
            ],
        }
    }

    /// Borrowed view in the shape the derivation port expects.
    pub fn as_slices(&self) -> Vec<&[u8]> {
        self.seeds.iter().map(Vec::as_slice).collect()
    }

    /// Number of seeds.
    pub fn len(&self) -> usize {
        self.seeds.len()
    }

    /// True when there are no seeds.
    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}
