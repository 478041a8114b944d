//! # Cube State
//!
//! Validated cube configuration and the unvalidated wire shape it is
//! decoded from.
//!
//! ## Representation
//!
//! Permutations are 1-based: slot `i` holds piece `cp[i]`. The solved state
//! is `cp = [1..=8]`, `ep = [1..=12]` with all orientations zero. This is
//! the layout stored in challenge accounts and returned by peeks.

use super::errors::CubeError;
use super::invariants::check_all_invariants;
use super::move_table::{entry, CORNERS, EDGES};
use super::moves::Move;
use serde::{Deserialize, Serialize};

/// Unvalidated cube arrays, exactly as they travel over the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCube {
    /// Corner orientation.
    pub co: [u8; CORNERS],
    /// Corner permutation.
    pub cp: [u8; CORNERS],
    /// Edge orientation.
    pub eo: [u8; EDGES],
    /// Edge permutation.
    pub ep: [u8; EDGES],
}

/// A reachable cube configuration.
///
/// Every value of this type satisfies the reachability invariants, so
/// [`CubeState::apply`] is total: any state accepts any of the 18 moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCube", into = "RawCube")]
pub struct CubeState {
    co: [u8; CORNERS],
    cp: [u8; CORNERS],
    eo: [u8; EDGES],
    ep: [u8; EDGES],
}

impl CubeState {
    /// The solved cube.
    pub const fn identity() -> Self {
        Self {
            co: [0; CORNERS],
            cp: [1, 2, 3, 4, 5, 6, 7, 8],
            eo: [0; EDGES],
            ep: [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12],
        }
    }

    /// Validate raw arrays into a cube state.
    pub fn new(
        co: [u8; CORNERS],
        cp: [u8; CORNERS],
        eo: [u8; EDGES],
        ep: [u8; EDGES],
    ) -> Result<Self, CubeError> {
        check_all_invariants(&co, &cp, &eo, &ep)?;
        Ok(Self { co, cp, eo, ep })
    }

    /// Corner orientation.
    pub fn co(&self) -> [u8; CORNERS] {
        self.co
    }

    /// Corner permutation.
    pub fn cp(&self) -> [u8; CORNERS] {
        self.cp
    }

    /// Edge orientation.
    pub fn eo(&self) -> [u8; EDGES] {
        self.eo
    }

    /// Edge permutation.
    pub fn ep(&self) -> [u8; EDGES] {
        self.ep
    }

    /// Apply one atomic move, returning the new state.
    #[must_use]
    pub fn apply(&self, mv: Move) -> Self {
        let table = entry(mv);
        let mut next = *self;
        for slot in 0..CORNERS {
            let from = usize::from(table.corner_from[slot]);
            next.cp[slot] = self.cp[from];
            next.co[slot] = (self.co[from] + table.corner_twist[slot]) % 3;
        }
        for slot in 0..EDGES {
            let from = usize::from(table.edge_from[slot]);
            next.ep[slot] = self.ep[from];
            next.eo[slot] = (self.eo[from] + table.edge_flip[slot]) % 2;
        }
        next
    }

    /// Apply a sequence of moves left to right.
    #[must_use]
    pub fn apply_all<I>(&self, moves: I) -> Self
    where
        I: IntoIterator<Item = Move>,
    {
        moves.into_iter().fold(*self, |state, mv| state.apply(mv))
    }

    /// True iff permutations are the identity and all orientations are zero.
    pub fn is_solved(&self) -> bool {
        *self == Self::identity()
    }
}

impl Default for CubeState {
    fn default() -> Self {
        Self::identity()
    }
}

impl TryFrom<RawCube> for CubeState {
    type Error = CubeError;

    fn try_from(raw: RawCube) -> Result<Self, Self::Error> {
        Self::new(raw.co, raw.cp, raw.eo, raw.ep)
    }
}

impl From<CubeState> for RawCube {
    fn from(state: CubeState) -> Self {
        Self {
            co: state.co,
            cp: state.cp,
            eo: state.eo,
            ep: state.ep,
        }
    }
}
