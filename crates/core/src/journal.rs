use serde::{Deserialize, Serialize};

use crate::types::TurnAnalytics;

/// Record of one simulated match: the starting layout plus one entry per
/// tick, enough to re-run the match and prove the re-run identical.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchJournal {
    pub format_version: u16,
    pub build_id: String,
    /// Starting board as rows of the `.DABR` alphabet.
    pub layout: Vec<String>,
    pub tick_limit: u32,
    pub ticks: Vec<TickRecord>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickRecord {
    pub tick: u64,
    pub pass_decision: String,
    pub goal_scored: bool,
    /// Hash of the board after this tick resolved.
    pub board_hash: u64,
}

impl MatchJournal {
    pub fn new(layout: Vec<String>, tick_limit: u32) -> Self {
        Self {
            format_version: 1,
            build_id: "dev".to_string(),
            layout,
            tick_limit,
            ticks: Vec::new(),
        }
    }

    pub fn record_tick(&mut self, analytics: &TurnAnalytics, board_hash: u64) {
        self.ticks.push(TickRecord {
            tick: analytics.tick,
            pass_decision: analytics.pass_decision.clone(),
            goal_scored: analytics.goal_scored,
            board_hash,
        });
    }
}
