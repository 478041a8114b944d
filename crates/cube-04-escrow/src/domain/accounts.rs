//! # Program Accounts
//!
//! The three account kinds the escrow owns.
//!
//! | Account | Lifetime | Mutated by |
//! |---------|----------|------------|
//! | [`SponsorAccount`] | created on first challenge, never deleted | init |
//! | [`ChallengeAccount`] | creation until solved | nothing (closed on solve) |
//! | [`WinnerAccount`] | created on first win, never deleted | solve |

use cube_01_state_model::CubeState;
use serde::{Deserialize, Serialize};
use shared_types::{Address, Lamports};

/// Aggregate statistics of one `(owner, name)` sponsor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SponsorAccount {
    /// Wallet that funds the sponsor's challenges.
    pub owner: Address,
    /// Display name, set at creation.
    pub name: String,
    /// Description, set at creation.
    pub description: String,
    /// Number of challenges created; also the next challenge ordinal.
    pub challenges_created: u64,
    /// Sum of all prizes ever locked.
    pub total_fund: Lamports,
}

impl SponsorAccount {
    /// Fresh sponsor with no challenges.
    pub fn new(owner: Address, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            owner,
            name: name.into(),
            description: description.into(),
            challenges_created: 0,
            total_fund: 0,
        }
    }

    /// Account a new challenge funded with `prize`.
    pub fn record_challenge(&mut self, prize: Lamports) {
        self.challenges_created = self.challenges_created.saturating_add(1);
        self.total_fund = self.total_fund.saturating_add(prize);
    }
}

/// A funded, unsolved cube.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeAccount {
    /// Scrambled cube to solve.
    pub cube: CubeState,
    /// Locked prize.
    pub prize: Lamports,
    /// Sponsor account this challenge belongs to.
    pub sponsor: Address,
    /// Wallet that paid the storage deposit and gets it back on close.
    pub payer: Address,
    /// Position among the sponsor's challenges.
    pub ordinal: u64,
}

/// Aggregate statistics of one `(solver, name)` winner.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinnerAccount {
    /// Solver wallet that receives prizes.
    pub winner: Address,
    /// Challenges solved.
    pub challenges_won: u64,
    /// Sum of prizes paid out.
    pub cashed_prize: Lamports,
    /// Display name.
    pub name: String,
}

impl WinnerAccount {
    /// Fresh winner with no wins.
    pub fn new(winner: Address, name: impl Into<String>) -> Self {
        Self {
            winner,
            challenges_won: 0,
            cashed_prize: 0,
            name: name.into(),
        }
    }

    /// Account one solved challenge paying `prize`.
    pub fn record_win(&mut self, prize: Lamports) {
        self.challenges_won = self.challenges_won.saturating_add(1);
        self.cashed_prize = self.cashed_prize.saturating_add(prize);
    }
}

/// Any account the escrow owns, tagged by kind.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProgramAccount {
    /// Sponsor aggregate.
    Sponsor(SponsorAccount),
    /// Open challenge.
    Challenge(ChallengeAccount),
    /// Winner aggregate.
    Winner(WinnerAccount),
}

impl ProgramAccount {
    /// The sponsor, if this is one.
    pub fn into_sponsor(self) -> Option<SponsorAccount> {
        match self {
            ProgramAccount::Sponsor(s) => Some(s),
            _ => None,
        }
    }

    /// The challenge, if this is one.
    pub fn into_challenge(self) -> Option<ChallengeAccount> {
        match self {
            ProgramAccount::Challenge(c) => Some(c),
            _ => None,
        }
    }

    /// The winner, if this is one.
    pub fn into_winner(self) -> Option<WinnerAccount> {
        match self {
            ProgramAccount::Winner(w) => Some(w),
            _ => None,
        }
    }
}

impl From<SponsorAccount> for ProgramAccount {
    fn from(account: SponsorAccount) -> Self {
        ProgramAccount::Sponsor(account)
    }
}

impl From<ChallengeAccount> for ProgramAccount {
    fn from(account: ChallengeAccount) -> Self {
        ProgramAccount::Challenge(account)
    }
}

impl From<WinnerAccount> for ProgramAccount {
    fn from(account: WinnerAccount) -> Self {
        ProgramAccount::Winner(account)
    }
}
