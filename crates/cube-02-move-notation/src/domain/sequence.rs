//! # Move Sequence
//!
//! An ordered list of atomic moves with canonical notation output.

use super::errors::NotationError;
use super::parser::parse_moves;
use cube_01_state_model::Move;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Ordered atomic moves, applied left to right.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoveSequence(Vec<Move>);

impl MoveSequence {
    /// Empty sequence.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when there are no moves.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the moves.
    pub fn as_slice(&self) -> &[Move] {
        &self.0
    }

    /// Iterate over the moves in order.
    pub fn iter(&self) -> std::iter::Copied<std::slice::Iter<'_, Move>> {
        self.0.iter().copied()
    }

    /// Append a move.
    pub fn push(&mut self, mv: Move) {
        self.0.push(mv);
    }

    /// The sequence that undoes this one: reversed, each move inverted.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self(self.0.iter().rev().map(|mv| mv.inverse()).collect())
    }

    /// Unwrap into the underlying vector.
    pub fn into_inner(self) -> Vec<Move> {
        self.0
    }
}

impl From<Vec<Move>> for MoveSequence {
    fn from(moves: Vec<Move>) -> Self {
        Self(moves)
    }
}

impl FromIterator<Move> for MoveSequence {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for MoveSequence {
    type Item = Move;
    type IntoIter = std::vec::IntoIter<Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a MoveSequence {
    type Item = Move;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromStr for MoveSequence {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_moves(s)
    }
}

/// Canonical notation: single spaces between tokens.
impl fmt::Display for MoveSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, mv) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{mv}")?;
        }
        Ok(())
    }
}
