//! # Notation Parser
//!
//! Whitespace-separated tokens, each a face letter with an optional
//! modifier:
//!
//! | Token | Move |
//! |-------|------|
//! | `R` | R clockwise |
//! | `R'` | R counter-clockwise |
//! | `R2` | R half turn |
//!
//! Letters are case-sensitive. Anything else, including `R2'` or `r`, is an
//! [`NotationError::InvalidMove`].

use super::errors::NotationError;
use super::sequence::MoveSequence;
use cube_01_state_model::{Face, Move, Turn};
use tracing::trace;

/// Parse a single token.
///
/// The returned error reports position 0.
pub fn parse_move(token: &str) -> Result<Move, NotationError> {
    parse_token(token, 0)
}

/// Parse whitespace-separated notation.
///
/// Empty or all-whitespace input is the empty sequence.
pub fn parse_moves(text: &str) -> Result<MoveSequence, NotationError> {
    let moves = text
        .split_whitespace()
        .enumerate()
        .map(|(position, token)| parse_token(token, position))
        .collect::<Result<Vec<_>, _>>()?;
    trace!(count = moves.len(), "parsed move sequence");
    Ok(MoveSequence::from(moves))
}

/// Parse like [`parse_moves`], rejecting more than `max` tokens.
///
/// The length check happens before any token is parsed, so an overlong
/// input fails with [`NotationError::TooManyMoves`] even if it also holds
/// bad tokens.
pub fn parse_moves_bounded(text: &str, max: usize) -> Result<MoveSequence, NotationError> {
    let count = text.split_whitespace().count();
    if count > max {
        return Err(NotationError::TooManyMoves { count, max });
    }
    parse_moves(text)
}

fn parse_token(token: &str, position: usize) -> Result<Move, NotationError> {
    let invalid = || NotationError::InvalidMove {
        token: token.to_string(),
        position,
    };

    let mut chars = token.chars();
    let face = chars.next().and_then(Face::from_letter).ok_or_else(invalid)?;
    let turn = match chars.next() {
        None => Turn::Clockwise,
        Some('\'') => Turn::CounterClockwise,
        Some('2') => Turn::Double,
        Some(_) => return Err(invalid()),
    };
    if chars.next().is_some() {
        return Err(invalid());
    }
    Ok(Move::new(face, turn))
}
