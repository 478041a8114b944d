//! # Inbound Ports
//!
//! The escrow's public API.

use crate::domain::{ChallengeAccount, EscrowError, SponsorAccount, WinnerAccount};
use cube_01_state_model::{CubeState, RawCube};
use serde::{Deserialize, Serialize};
use shared_types::{Address, Lamports, TxSignature};

/// Lock a prize against a scrambled cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InitChallengeRequest {
    /// Sponsor wallet; pays the prize and deposits.
    pub sponsor: Address,
    /// Sponsor display name (part of the sponsor address).
    pub name: String,
    /// Sponsor description.
    pub description: String,
    /// Scrambled cube, unvalidated.
    pub cube: RawCube,
    /// Prize in lamports.
    pub prize: Lamports,
    /// Address of the challenge to create; must be the sponsor's next one.
    pub challenge_address: Address,
}

/// Lock a prize against the cube a scramble produces from the solved state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrambledInitRequest {
    /// Sponsor wallet; pays the prize and deposits.
    pub sponsor: Address,
    /// Sponsor display name (part of the sponsor address).
    pub name: String,
    /// Sponsor description.
    pub description: String,
    /// Scramble in standard notation.
    pub scramble: String,
    /// Prize in lamports.
    pub prize: Lamports,
    /// Address of the challenge to create; must be the sponsor's next one.
    pub challenge_address: Address,
}

/// Result of a committed init.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InitChallengeReceipt {
    /// Ledger transaction signature.
    pub signature: TxSignature,
    /// Sponsor aggregate address.
    pub sponsor_data: Address,
    /// Created challenge address.
    pub challenge: Address,
    /// Ordinal of the created challenge.
    pub ordinal: u64,
}

/// Submit a solution for a challenge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrySolutionRequest {
    /// Solver wallet; receives the prize.
    pub solver: Address,
    /// Challenge address.
    pub challenge: Address,
    /// Solution in standard notation.
    pub moves: String,
    /// Winner display name (part of the winner address).
    pub winner_name: String,
}

/// Result of a committed solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolveReceipt {
    /// Ledger transaction signature.
    pub signature: TxSignature,
    /// Winner aggregate address.
    pub winner_data: Address,
    /// Prize paid to the solver.
    pub prize: Lamports,
    /// Number of moves in the accepted solution.
    pub moves: usize,
}

/// Escrow API - inbound port.
pub trait EscrowApi: Send + Sync {
    /// Create a funded challenge.
    fn init_challenge(&self, request: InitChallengeRequest)
        -> Result<InitChallengeReceipt, EscrowError>;

    /// Create a funded challenge from a scramble applied to the solved cube.
    fn init_challenge_with_scramble(
        &self,
        request: ScrambledInitRequest,
    ) -> Result<InitChallengeReceipt, EscrowError>;

    /// Attempt to solve a challenge; pays out and closes it on success.
    fn try_solution(&self, request: TrySolutionRequest) -> Result<SolveReceipt, EscrowError>;

    /// Apply moves to the identity, or to a challenge's cube, without writing.
    fn peek_cube(&self, moves: &str, challenge: Option<&Address>) -> Result<CubeState, EscrowError>;

    /// Read a sponsor aggregate.
    fn get_sponsor(&self, address: &Address) -> Result<SponsorAccount, EscrowError>;

    /// Read an open challenge.
    fn get_challenge(&self, address: &Address) -> Result<ChallengeAccount, EscrowError>;

    /// Read a winner aggregate.
    fn get_winner(&self, address: &Address) -> Result<WinnerAccount, EscrowError>;

    /// Every sponsor aggregate.
    fn list_sponsors(&self) -> Result<Vec<(Address, SponsorAccount)>, EscrowError>;

    /// Every open challenge.
    fn list_challenges(&self) -> Result<Vec<(Address, ChallengeAccount)>, EscrowError>;

    /// Every winner aggregate.
    fn list_winners(&self) -> Result<Vec<(Address, WinnerAccount)>, EscrowError>;

    /// Address the sponsor `(owner, name)` must use for its next challenge.
    fn next_challenge_address(&self, owner: &Address, name: &str) -> Result<Address, EscrowError>;
}
