//! # Address Derivation
//!
//! Seed layouts fed through an [`AddressDeriver`].

use crate::domain::{DerivationError, SeedSet};
use crate::ports::AddressDeriver;
use shared_types::Address;
use tracing::debug;

/// Address of the sponsor aggregate for `(owner, name)`.
pub fn derive_sponsor_address<D: AddressDeriver + ?Sized>(
    deriver: &D,
    owner: &Address,
    name: &str,
) -> Result<Address, DerivationError> {
    deriver.derive_address(&SeedSet::sponsor(owner, name).as_slices())
}

/// Address of the `ordinal`-th challenge created under `sponsor_data`.
pub fn derive_challenge_address<D: AddressDeriver + ?Sized>(
    deriver: &D,
    sponsor_data: &Address,
    ordinal: u64,
) -> Result<Address, DerivationError> {
    deriver.derive_address(&SeedSet::challenge(sponsor_data, ordinal).as_slices())
}

/// Address of the winner aggregate for `(solver, name)`.
pub fn derive_winner_address<D: AddressDeriver + ?Sized>(
    deriver: &D,
    solver: &Address,
    name: &str,
) -> Result<Address, DerivationError> {
    deriver.derive_address(&SeedSet::winner(solver, name).as_slices())
}

/// Address of the `n`-th challenge of the sponsor `(owner, name)`.
///
/// Chains [`derive_sponsor_address`] and [`derive_challenge_address`], the
/// way a client locates a challenge it only knows by sponsor and index.
pub fn nth_challenge_address<D: AddressDeriver + ?Sized>(
    deriver: &D,
    owner: &Address,
    name: &str,
    n: u64,
) -> Result<Address, DerivationError> {
    let sponsor_data = derive_sponsor_address(deriver, owner, name)?;
    let challenge = derive_challenge_address(deriver, &sponsor_data, n)?;
    debug!(
        sponsor = %sponsor_data.short(),
        challenge = %challenge.short(),
        ordinal = n,
        "located challenge"
    );
    Ok(challenge)
}
