//! # Request Validation
//!
//! Checks that run before any account is read or written.

use super::config::EscrowConfig;
use super::errors::EscrowError;
use cube_01_state_model::{CubeState, RawCube};
use shared_types::Lamports;

/// Validate init-challenge inputs in order: name, description, prize, cube.
pub fn validate_init(
    config: &EscrowConfig,
    name: &str,
    description: &str,
    prize: Lamports,
    cube: RawCube,
) -> Result<CubeState, EscrowError> {
    if name.len() > config.max_sponsor_name_len {
        return Err(EscrowError::SponsorNameTooLong {
            len: name.len(),
            max: config.max_sponsor_name_len,
        });
    }
    if description.len() > config.max_sponsor_desc_len {
        return Err(EscrowError::SponsorDescTooLong {
            len: description.len(),
            max: config.max_sponsor_desc_len,
        });
    }
    if prize == 0 {
        return Err(EscrowError::ZeroPrize);
    }
    Ok(CubeState::try_from(cube)?)
}

/// Validate the winner display name.
pub fn validate_winner_name(config: &EscrowConfig, name: &str) -> Result<(), EscrowError> {
    if name.len() > config.max_winner_name_len {
        return Err(EscrowError::WinnerNameTooLong {
            len: name.len(),
            max: config.max_winner_name_len,
        });
    }
    Ok(())
}
