//! # Domain Invariants
//!
//! Reachability rules of the physical cube group.
//!
//! | Rule | Check |
//! |------|-------|
//! | Permutations | `cp` is a permutation of 1..=8, `ep` of 1..=12 |
//! | Orientation range | `co[i] < 3`, `eo[i] < 2` |
//! | Corner twist | `Σ co ≡ 0 (mod 3)` |
//! | Edge flip | `Σ eo ≡ 0 (mod 2)` |
//! | Parity | `parity(cp) == parity(ep)` |

use super::errors::{CubeError, PieceKind};

/// Check that `perm` holds each of `1..=perm.len()` exactly once.
pub fn invariant_permutation(perm: &[u8], kind: PieceKind) -> Result<(), CubeError> {
    let size = perm.len();
    let mut seen = vec![false; size];
    for &piece in perm {
        let idx = usize::from(piece).wrapping_sub(1);
        match seen.get_mut(idx) {
            Some(slot) if !*slot => *slot = true,
            _ => return Err(CubeError::NotAPermutation { kind, size }),
        }
    }
    Ok(())
}

/// Check that every orientation is below `modulus` and that the total is
/// divisible by it.
pub fn invariant_orientation(
    orientation: &[u8],
    kind: PieceKind,
    modulus: u8,
) -> Result<(), CubeError> {
    if let Some((slot, &value)) = orientation
        .iter()
        .enumerate()
        .find(|&(_, &v)| v >= modulus)
    {
        return Err(CubeError::OrientationOutOfRange {
            kind,
            slot,
            value,
            modulus,
        });
    }

    let sum: u32 = orientation.iter().map(|&v| u32::from(v)).sum();
    if sum % u32::from(modulus) != 0 {
        return Err(match kind {
            PieceKind::Corner => CubeError::CornerTwist { sum },
            PieceKind::Edge => CubeError::EdgeFlip { sum },
        });
    }
    Ok(())
}

/// Parity of a 1-based permutation: `true` when odd.
///
/// Caller must have checked the permutation with [`invariant_permutation`].
pub fn permutation_is_odd(perm: &[u8]) -> bool {
    let mut visited = vec![false; perm.len()];
    let mut transpositions = 0usize;
    for start in 0..perm.len() {
        if visited[start] {
            continue;
        }
        let mut cycle_len = 0;
        let mut slot = start;
        while !visited[slot] {
            visited[slot] = true;
            slot = usize::from(perm[slot]) - 1;
            cycle_len += 1;
        }
        transpositions += cycle_len - 1;
    }
    transpositions % 2 == 1
}

/// Check that corner and edge permutations have the same parity.
pub fn invariant_parity(cp: &[u8], ep: &[u8]) -> Result<(), CubeError> {
    let corners_odd = permutation_is_odd(cp);
    let edges_odd = permutation_is_odd(ep);
    if corners_odd != edges_odd {
        return Err(CubeError::ParityMismatch {
            corners_odd,
            edges_odd,
        });
    }
    Ok(())
}

/// Run every reachability check in order.
pub fn check_all_invariants(
    co: &[u8],
    cp: &[u8],
    eo: &[u8],
    ep: &[u8],
) -> Result<(), CubeError> {
    invariant_permutation(cp, PieceKind::Corner)?;
    invariant_permutation(ep, PieceKind::Edge)?;
    invariant_orientation(co, PieceKind::Corner, 3)?;
    invariant_orientation(eo, PieceKind::Edge, 2)?;
    invariant_parity(cp, ep)
}
