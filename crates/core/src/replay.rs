use crate::game::{Match, board_hash, goal_within_reach};
use crate::journal::MatchJournal;
use crate::state::Board;
use crate::types::LayoutError;

#[derive(Debug, PartialEq)]
pub enum ReplayError {
    Layout(LayoutError),
    HashMismatch { tick: u64, expected: u64, actual: u64 },
}

#[derive(Debug, PartialEq)]
pub struct ReplayResult {
    pub final_tick: u64,
    pub goal_scored: bool,
    pub final_board_hash: u64,
}

/// Re-runs a recorded match from its starting layout, checking the board
/// hash after every tick against the journal. The first divergence aborts
/// the replay; a clean run returns the final state summary.
pub fn replay_to_end(journal: &MatchJournal) -> Result<ReplayResult, ReplayError> {
    let board = Board::from_rows(&journal.layout).map_err(ReplayError::Layout)?;
    let mut game = Match::new(board);

    for record in &journal.ticks {
        let analytics = game.advance_tick();
        let actual = board_hash(game.board());
        if actual != record.board_hash {
            return Err(ReplayError::HashMismatch {
                tick: analytics.tick,
                expected: record.board_hash,
                actual,
            });
        }
    }

    Ok(ReplayResult {
        final_tick: game.current_tick(),
        goal_scored: game.goal_scored() || goal_within_reach(game.board()),
        final_board_hash: board_hash(game.board()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded_run(layout: &[&str], ticks: u32) -> (MatchJournal, Match) {
        let rows: Vec<String> = layout.iter().map(|row| row.to_string()).collect();
        let mut journal = MatchJournal::new(rows.clone(), ticks);
        let mut game = Match::new(Board::from_rows(&rows).unwrap());
        for _ in 0..ticks {
            if game.goal_scored() {
                break;
            }
            let analytics = game.advance_tick();
            journal.record_tick(&analytics, board_hash(game.board()));
        }
        (journal, game)
    }

    #[test]
    fn replay_reproduces_the_recorded_run() {
        let (journal, game) = recorded_run(
            &[".D.D.......", "..A........", "RDBA......R", ".ADA.......", ".D........."],
            8,
        );

        let result = replay_to_end(&journal).unwrap();
        assert_eq!(result.final_tick, game.current_tick());
        assert_eq!(result.final_board_hash, board_hash(game.board()));
    }

    #[test]
    fn corrupted_tick_hash_is_reported_at_its_tick() {
        let (mut journal, _) = recorded_run(
            &[".D.D.......", "..A........", "RDBA......R", ".ADA.......", ".D........."],
            4,
        );
        let expected = journal.ticks[2].board_hash;
        journal.ticks[2].board_hash = expected.wrapping_add(1);

        match replay_to_end(&journal) {
            Err(ReplayError::HashMismatch { tick, expected: recorded, actual }) => {
                assert_eq!(tick, 3);
                assert_eq!(recorded, expected.wrapping_add(1));
                assert_eq!(actual, expected);
            }
            other => panic!("expected a hash mismatch, got {other:?}"),
        }
    }

    #[test]
    fn unparseable_layout_is_rejected() {
        let journal = MatchJournal::new(vec!["..X".to_string()], 4);
        assert!(matches!(replay_to_end(&journal), Err(ReplayError::Layout(_))));
    }

    #[test]
    fn goal_run_reports_goal_in_the_result() {
        let (journal, _) = recorded_run(&["..BR"], 4);
        let result = replay_to_end(&journal).unwrap();
        assert!(result.goal_scored);
        assert_eq!(result.final_tick, 1);
    }
}
