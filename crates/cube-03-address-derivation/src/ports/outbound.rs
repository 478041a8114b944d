//! # Outbound Ports
//!
//! The host's address derivation primitive.

use crate::domain::DerivationError;
use shared_types::Address;

/// Deterministic seeds-to-address function owned by the host integration.
///
/// Implementations must be pure: the same seeds always give the same
/// address, and no I/O happens.
pub trait AddressDeriver: Send + Sync {
    /// Derive the address for an ordered seed list.
    fn derive_address(&self, seeds: &[&[u8]]) -> Result<Address, DerivationError>;
}

impl<T: AddressDeriver + ?Sized> AddressDeriver for std::sync::Arc<T> {
    fn derive_address(&self, seeds: &[&[u8]]) -> Result<Address, DerivationError> {
        (**self).derive_address(seeds)
    }
}

impl<T: AddressDeriver + ?Sized> AddressDeriver for &T {
    fn derive_address(&self, seeds: &[&[u8]]) -> Result<Address, DerivationError> {
        (**self).derive_address(seeds)
    }
}
