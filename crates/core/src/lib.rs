pub mod game;
pub mod journal;
pub mod replay;
pub mod state;
pub mod types;

pub use game::{
    ATTACK_STEP_BUDGET, DEFENSE_STEP_BUDGET, Match, PathResult, advance_turn, board_hash,
    find_path, goal_within_reach, manhattan,
};
pub use journal::{MatchJournal, TickRecord};
pub use replay::*;
pub use state::Board;
pub use types::*;
