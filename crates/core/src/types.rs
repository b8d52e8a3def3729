use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Pos {
    pub row: i32,
    pub col: i32,
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CellKind {
    Empty,
    Defender,
    Attacker,
    BallCarrier,
    Ring,
}

impl CellKind {
    pub fn from_char(value: char) -> Option<CellKind> {
        match value {
            '.' => Some(CellKind::Empty),
            'D' => Some(CellKind::Defender),
            'A' => Some(CellKind::Attacker),
            'B' => Some(CellKind::BallCarrier),
            'R' => Some(CellKind::Ring),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            CellKind::Empty => '.',
            CellKind::Defender => 'D',
            CellKind::Attacker => 'A',
            CellKind::BallCarrier => 'B',
            CellKind::Ring => 'R',
        }
    }

    /// Cells the path search may route through. Defenders slow a route via
    /// the heuristic penalty but are never stepped on.
    pub fn passable(self) -> bool {
        matches!(self, CellKind::Empty | CellKind::Ring)
    }
}

/// Exact integer path cost. `Unreachable` orders after every finite cost so
/// minimum selection over mixed results needs no special casing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PathCost {
    Reachable(u32),
    Unreachable,
}

impl PathCost {
    pub fn finite(self) -> Option<u32> {
        match self {
            PathCost::Reachable(cost) => Some(cost),
            PathCost::Unreachable => None,
        }
    }
}

impl fmt::Display for PathCost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathCost::Reachable(cost) => write!(f, "{cost}"),
            PathCost::Unreachable => write!(f, "unreachable"),
        }
    }
}

/// Per-tick record handed back to the caller for reporting.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnAnalytics {
    pub tick: u64,
    /// Post-move cost per attacking actor, in the enumeration order that also
    /// drives pass tie-breaks: plain attackers in scan order, carrier last.
    pub attacker_costs: Vec<(Pos, PathCost)>,
    pub pass_target: Option<Pos>,
    pub pass_decision: String,
    /// Carrier position on the input board, before any movement.
    pub ball_carrier: Option<Pos>,
    /// Where the carrier's own greedy move ended up this tick.
    pub carrier_moved_to: Option<Pos>,
    pub target_ring: Option<Pos>,
    pub goal_scored: bool,
}

impl TurnAnalytics {
    pub(crate) fn empty(tick: u64) -> Self {
        Self {
            tick,
            attacker_costs: Vec::new(),
            pass_target: None,
            pass_decision: String::new(),
            ball_carrier: None,
            carrier_moved_to: None,
            target_ring: None,
            goal_scored: false,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    BallKept { carrier: Pos, cost: PathCost },
    BallPassed { from: Pos, to: Pos, cost: PathCost },
    GoalScored { tick: u64, ring: Pos },
    TickSkipped { tick: u64 },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    EmptyLayout,
    RaggedRow { row: usize },
    UnknownSymbol { row: usize, col: usize, symbol: char },
}
