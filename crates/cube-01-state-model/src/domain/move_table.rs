//! # Move Table
//!
//! The 18 fixed permutation/orientation-delta entries, one per atomic move.
//!
//! ## Slot Order
//!
//! ```text
//! corners: 0:UBL 1:UBR 2:UFR 3:UFL 4:DFL 5:DFR 6:DBR 7:DBL
//! edges:   0:UB  1:UR  2:UF  3:UL  4:BL  5:BR  6:FR  7:FL  8:DF  9:DR  10:DB 11:DL
//! ```
//!
//! Each clockwise quarter turn is a four-slot cycle on corners and on edges
//! plus an orientation mask added at the destination slots. Edge flips only
//! happen on F and B turns. The counter-clockwise and half-turn entries are
//! compositions of the clockwise entry, computed at compile time so that
//! the table cannot drift out of sync with itself.

use super::moves::Move;

/// Number of corner slots.
pub const CORNERS: usize = 8;
/// Number of edge slots.
pub const EDGES: usize = 12;

/// A move expressed as "take slot `from[i]`, then add `delta[i]`".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct MoveTable {
    pub corner_from: [u8; CORNERS],
    pub corner_twist: [u8; CORNERS],
    pub edge_from: [u8; EDGES],
    pub edge_flip: [u8; EDGES],
}

const IDENTITY: MoveTable = MoveTable {
    corner_from: [0, 1, 2, 3, 4, 5, 6, 7],
    corner_twist: [0; CORNERS],
    edge_from: [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11],
    edge_flip: [0; EDGES],
};

/// Clockwise quarter turn: the piece in `cycle[k]` moves to `cycle[k + 1]`.
const fn quarter_turn(
    corner_cycle: [usize; 4],
    edge_cycle: [usize; 4],
    twist: [u8; CORNERS],
    flip: [u8; EDGES],
) -> MoveTable {
    let mut table = IDENTITY;
    let mut k = 0;
    while k < 4 {
        table.corner_from[corner_cycle[(k + 1) % 4]] = corner_cycle[k] as u8;
        table.edge_from[edge_cycle[(k + 1) % 4]] = edge_cycle[k] as u8;
        k += 1;
    }
    table.corner_twist = twist;
    table.edge_flip = flip;
    table
}

/// `first` followed by `second`.
const fn compose(first: MoveTable, second: MoveTable) -> MoveTable {
    let mut out = IDENTITY;
    let mut i = 0;
    while i < CORNERS {
        let via = second.corner_from[i] as usize;
        out.corner_from[i] = first.corner_from[via];
        out.corner_twist[i] = (first.corner_twist[via] + second.corner_twist[i]) % 3;
        i += 1;
    }
    let mut j = 0;
    while j < EDGES {
        let via = second.edge_from[j] as usize;
        out.edge_from[j] = first.edge_from[via];
        out.edge_flip[j] = (first.edge_flip[via] + second.edge_flip[j]) % 2;
        j += 1;
    }
    out
}

const NO_TWIST: [u8; CORNERS] = [0; CORNERS];
const NO_FLIP: [u8; EDGES] = [0; EDGES];

/// Clockwise quarter turns in `Face` order: U D F B L R.
const QUARTER_TURNS: [MoveTable; 6] = [
    quarter_turn([0, 1, 2, 3], [0, 1, 2, 3], NO_TWIST, NO_FLIP),
    quarter_turn([4, 5, 6, 7], [8, 9, 10, 11], NO_TWIST, NO_FLIP),
    quarter_turn(
        [2, 5, 4, 3],
        [2, 6, 8, 7],
        [0, 0, 1, 2, 1, 2, 0, 0],
        [0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0, 0],
    ),
    quarter_turn(
        [7, 6, 1, 0],
        [4, 10, 5, 0],
        [1, 2, 0, 0, 0, 0, 1, 2],
        [1, 0, 0, 0, 1, 1, 0, 0, 0, 0, 1, 0],
    ),
    quarter_turn([3, 4, 7, 0], [3, 7, 11, 4], [2, 0, 0, 1, 2, 0, 0, 1], NO_FLIP),
    quarter_turn([6, 5, 2, 1], [1, 5, 9, 6], [0, 1, 2, 0, 0, 1, 2, 0], NO_FLIP),
];

const fn build_table() -> [MoveTable; 18] {
    let mut table = [IDENTITY; 18];
    let mut face = 0;
    while face < 6 {
        let clockwise = QUARTER_TURNS[face];
        let double = compose(clockwise, clockwise);
        table[face * 3] = clockwise;
        table[face * 3 + 1] = compose(double, clockwise);
        table[face * 3 + 2] = double;
        face += 1;
    }
    table
}

static MOVE_TABLE: [MoveTable; 18] = build_table();

/// Table entry for an atomic move.
pub(crate) fn entry(mv: Move) -> &'static MoveTable {
    &MOVE_TABLE[mv.index()]
}
