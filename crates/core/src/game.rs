use crate::state::Board;
use crate::types::*;

mod engine;
mod hash;
mod movement;
mod pathfinding;
#[cfg(test)]
mod test_support;

pub use engine::{ATTACK_STEP_BUDGET, DEFENSE_STEP_BUDGET, advance_turn, goal_within_reach};
pub use hash::board_hash;
pub use pathfinding::{PathResult, find_path, manhattan};

pub(crate) use movement::advance_toward;
pub(crate) use pathfinding::neighbors;

/// A running match: the current board, the tick counter, and the event log
/// collected for the caller to drain.
pub struct Match {
    tick: u64,
    board: Board,
    log: Vec<LogEvent>,
    goal_scored: bool,
}

impl Match {
    pub fn new(board: Board) -> Self {
        Self { tick: 0, board, log: Vec::new(), goal_scored: false }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn goal_scored(&self) -> bool {
        self.goal_scored
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    /// Runs one full turn, adopts the resulting board, and records the
    /// tick's decision in the event log.
    pub fn advance_tick(&mut self) -> TurnAnalytics {
        self.tick += 1;
        let (board, analytics) = engine::advance_turn(&self.board, self.tick);
        self.board = board;
        self.record_events(&analytics);
        if analytics.goal_scored {
            self.goal_scored = true;
        }
        analytics
    }

    fn record_events(&mut self, analytics: &TurnAnalytics) {
        let Some(target) = analytics.pass_target else {
            self.log.push(LogEvent::TickSkipped { tick: analytics.tick });
            return;
        };
        let cost = analytics
            .attacker_costs
            .iter()
            .find(|(pos, _)| *pos == target)
            .map_or(PathCost::Unreachable, |(_, cost)| *cost);
        if analytics.carrier_moved_to == Some(target) {
            self.log.push(LogEvent::BallKept { carrier: target, cost });
        } else if let Some(from) = analytics.carrier_moved_to {
            self.log.push(LogEvent::BallPassed { from, to: target, cost });
        }
        if analytics.goal_scored
            && let Some(ring) = analytics.target_ring
        {
            self.log.push(LogEvent::GoalScored { tick: analytics.tick, ring });
        }
    }
}
