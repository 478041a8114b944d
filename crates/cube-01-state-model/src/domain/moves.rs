//! # Atomic Moves
//!
//! The 18 atomic moves of the face-turn metric: six faces, each turned
//! clockwise, counter-clockwise or twice.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A face of the cube.
///
/// Discriminants index the move table (`face * 3 + turn`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Up.
    U = 0,
    /// Down.
    D = 1,
    /// Front.
    F = 2,
    /// Back.
    B = 3,
    /// Left.
    L = 4,
    /// Right.
    R = 5,
}

impl Face {
    /// All faces in table order.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// Notation letter for this face.
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }

    /// Face for a notation letter, if any.
    pub const fn from_letter(letter: char) -> Option<Face> {
        match letter {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }
}

/// How far a face is turned.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Turn {
    /// Quarter turn clockwise (no suffix).
    Clockwise = 0,
    /// Quarter turn counter-clockwise (`'` suffix).
    CounterClockwise = 1,
    /// Half turn (`2` suffix).
    Double = 2,
}

impl Turn {
    /// All turns in table order.
    pub const ALL: [Turn; 3] = [Turn::Clockwise, Turn::CounterClockwise, Turn::Double];

    /// The turn that undoes this one.
    pub const fn inverse(self) -> Turn {
        match self {
            Turn::Clockwise => Turn::CounterClockwise,
            Turn::CounterClockwise => Turn::Clockwise,
            Turn::Double => Turn::Double,
        }
    }

    /// Notation suffix (empty for clockwise).
    pub const fn suffix(self) -> &'static str {
        match self {
            Turn::Clockwise => "",
            Turn::CounterClockwise => "'",
            Turn::Double => "2",
        }
    }
}

/// One atomic face move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Face being turned.
    pub face: Face,
    /// Direction and amount.
    pub turn: Turn,
}

impl Move {
    /// Every atomic move, in table order.
    pub const ALL: [Move; 18] = {
        let mut all = [Move::new(Face::U, Turn::Clockwise); 18];
        let mut i = 0;
        while i < 18 {
            all[i] = Move::new(Face::ALL[i / 3], Turn::ALL[i % 3]);
            i += 1;
        }
        all
    };

    /// Create a move.
    pub const fn new(face: Face, turn: Turn) -> Self {
        Self { face, turn }
    }

    /// The move that undoes this one.
    pub const fn inverse(self) -> Self {
        Self::new(self.face, self.turn.inverse())
    }

    /// Position of this move in the move table.
    pub const fn index(self) -> usize {
        self.face as usize * 3 + self.turn as usize
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face.letter(), self.turn.suffix())
    }
}
