//! Greedy per-tick stepping for attacking actors.
//! This module exists so local collision-avoiding movement stays separate
//! from the global path search: it is a movement model, not a planner.

use std::collections::BTreeSet;

use super::*;
use crate::state::Board;

/// Advances an actor up to `max_steps` cells toward `target`, one greedy
/// step at a time. Each step picks the empty, unclaimed neighbor closest to
/// the target by Manhattan distance (first-seen wins ties) and claims it in
/// `occupied`, which is shared by every actor moving this tick. Stops early
/// when no neighbor qualifies; actors can wedge behind a screen even when a
/// longer clear route exists.
pub(crate) fn advance_toward(
    board: &Board,
    from: Pos,
    target: Pos,
    occupied: &mut BTreeSet<Pos>,
    max_steps: u32,
) -> Pos {
    let mut current = from;
    for _ in 0..max_steps {
        let mut best: Option<(u32, Pos)> = None;
        for next in neighbors(current) {
            if board.cell_at(next) != CellKind::Empty || occupied.contains(&next) {
                continue;
            }
            let distance = manhattan(next, target);
            if best.is_none_or(|(best_distance, _)| distance < best_distance) {
                best = Some((distance, next));
            }
        }
        match best {
            Some((_, next)) => {
                occupied.insert(next);
                current = next;
            }
            None => break,
        }
    }
    current
}
