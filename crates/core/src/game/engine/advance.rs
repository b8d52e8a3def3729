//! The per-tick turn sequence: move the attack, re-rank path costs, pick
//! the pass, resolve a goal, place everyone, then let the defense drift.

use std::collections::BTreeSet;

use super::*;
use crate::state::Board;

/// Runs one full turn over `board`. Pure function of its inputs; `tick` only
/// flavors the reported decision text. Missing carrier or ring makes the
/// tick a no-op that returns the input board unchanged.
pub fn advance_turn(board: &Board, tick: u64) -> (Board, TurnAnalytics) {
    let mut analytics = TurnAnalytics::empty(tick);

    // Rings are the only survivors of the reset; every actor is re-placed
    // after moving.
    let mut next = board.cleared_keeping_rings();

    let actors =
        board.find_actors(&[CellKind::Attacker, CellKind::Defender, CellKind::BallCarrier]);
    let Some(&carrier) = actors[&CellKind::BallCarrier].first() else {
        return (board.clone(), analytics);
    };
    let Some(ring) = board.target_ring() else {
        return (board.clone(), analytics);
    };
    analytics.ball_carrier = Some(carrier);
    analytics.target_ring = Some(ring);

    // Attackers in scan order with the carrier last; pass tie-breaks fall
    // back on this enumeration order.
    let mut attacking: Vec<Pos> = actors[&CellKind::Attacker].clone();
    attacking.push(carrier);

    let mut occupied = BTreeSet::new();
    let moved: Vec<(Pos, Pos)> = attacking
        .iter()
        .map(|&from| {
            (from, advance_toward(&next, from, ring, &mut occupied, ATTACK_STEP_BUDGET))
        })
        .collect();
    let carrier_moved_to = moved
        .iter()
        .find(|&&(from, _)| from == carrier)
        .map_or(carrier, |&(_, to)| to);
    analytics.carrier_moved_to = Some(carrier_moved_to);

    // Rank costs on a scratch board holding only rings plus the actors that
    // won their destination cell; the loser of a same-cell race sits this
    // ranking out.
    let mut ranking_board = next.clone();
    let mut placed: Vec<Pos> = Vec::new();
    for &(_, to) in &moved {
        if ranking_board.cell_at(to) == CellKind::Empty {
            let kind = if to == carrier_moved_to {
                CellKind::BallCarrier
            } else {
                CellKind::Attacker
            };
            ranking_board.set_cell(to, kind);
            placed.push(to);
        }
    }
    for &to in &placed {
        let cost = find_path(&ranking_board, to, ring).cost;
        analytics.attacker_costs.push((to, cost));
    }

    // First minimum wins; strict comparison keeps the enumeration order as
    // the tie-break.
    let mut best: Option<(Pos, PathCost)> = None;
    for &(pos, cost) in &analytics.attacker_costs {
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((pos, cost));
        }
    }
    // The first mover always claims its cell, so a carrier on the board
    // means at least one ranked actor; the fallback is unreachable.
    let (pass_target, best_cost) = best.unwrap_or((carrier_moved_to, PathCost::Unreachable));
    analytics.pass_target = Some(pass_target);
    analytics.pass_decision = pass_decision_text(
        &analytics.attacker_costs,
        pass_target,
        best_cost,
        carrier_moved_to,
        tick,
    );

    let goal_scored = best_cost.finite().is_some_and(|cost| cost <= GOAL_COST_THRESHOLD);
    analytics.goal_scored = goal_scored;

    for &(_, to) in &moved {
        if goal_scored && to == pass_target {
            // Scoring placement: the new carrier goes straight onto the
            // ring while it is still free.
            if next.cell_at(ring) == CellKind::Ring {
                next.set_cell(ring, CellKind::BallCarrier);
            }
        } else if next.cell_at(to) == CellKind::Empty {
            let kind =
                if to == pass_target { CellKind::BallCarrier } else { CellKind::Attacker };
            next.set_cell(to, kind);
        }
    }

    for (_, to) in defense::resolve_defender_moves(&actors[&CellKind::Defender], &next) {
        if next.cell_at(to) == CellKind::Empty {
            next.set_cell(to, CellKind::Defender);
        }
    }

    (next, analytics)
}

/// Terminal-condition check: true when the carrier's path cost to the
/// target ring is at most one step.
pub fn goal_within_reach(board: &Board) -> bool {
    let carriers = board.find_actors(&[CellKind::BallCarrier]);
    let Some(&carrier) = carriers[&CellKind::BallCarrier].first() else {
        return false;
    };
    let Some(ring) = board.target_ring() else {
        return false;
    };
    find_path(board, carrier, ring)
        .cost
        .finite()
        .is_some_and(|cost| cost <= GOAL_COST_THRESHOLD)
}

fn pass_decision_text(
    costs: &[(Pos, PathCost)],
    pass_target: Pos,
    best_cost: PathCost,
    carrier_moved_to: Pos,
    tick: u64,
) -> String {
    let mut text = if pass_target == carrier_moved_to {
        format!("Keep ball (best option: cost {})", display_cost(best_cost, tick))
    } else {
        format!("Pass to {pass_target} (cost: {})", display_cost(best_cost, tick))
    };
    let options: Vec<String> = costs
        .iter()
        .map(|&(pos, cost)| {
            let role = if pos == carrier_moved_to { "Ball carrier" } else { "Player" };
            format!("{role} at {pos}: cost {}", display_cost(cost, tick))
        })
        .collect();
    text.push_str(" | Options: ");
    text.push_str(&options.join(" | "));
    text
}

/// Reported costs fold the tick index in. Display flavor only; it never
/// feeds back into the search or the ranking.
fn display_cost(cost: PathCost, tick: u64) -> String {
    match cost.finite() {
        Some(cost) => (u64::from(cost) + tick).to_string(),
        None => "unreachable".to_string(),
    }
}
