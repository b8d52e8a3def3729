//! Defender drift resolution.
//! This module exists to keep the defense's movement rule and its conflict
//! bookkeeping out of the main turn sequence.

use std::collections::BTreeSet;

use super::*;
use crate::state::Board;

/// Resolves every defender's rightward drift, in scan order, against the
/// in-progress board for this tick. A step needs an in-bounds empty cell not
/// already taken by an earlier defender's move; the first refused step ends
/// that defender's turn.
pub(super) fn resolve_defender_moves(defenders: &[Pos], board: &Board) -> Vec<(Pos, Pos)> {
    let mut claimed: BTreeSet<Pos> = BTreeSet::new();
    let mut moves = Vec::with_capacity(defenders.len());
    for &from in defenders {
        let mut current = from;
        for _ in 0..DEFENSE_STEP_BUDGET {
            let next = Pos { row: current.row, col: current.col + 1 };
            if board.cell_at(next) == CellKind::Empty && !claimed.contains(&next) {
                current = next;
            } else {
                break;
            }
        }
        claimed.insert(current);
        moves.push((from, current));
    }
    moves
}
