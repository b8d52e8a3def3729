//! Tests for defender drift: rightward steps, claim conflicts, and blocks.

use super::support::*;

#[test]
fn defenders_drift_two_cells_right_in_scan_order() {
    let board = Board::from_rows(&["B....R", "DD...."]).unwrap();

    let (next, _) = advance_turn(&board, 1);

    // The first defender takes both steps; the second is refused the cell
    // the first now claims and holds its ground.
    assert_eq!(next.to_rows(), vec!["..B..R".to_string(), ".DD...".to_string()]);
}

#[test]
fn defender_stops_at_the_board_edge() {
    let board = Board::from_rows(&["B...R", "....D"]).unwrap();

    let (next, _) = advance_turn(&board, 1);

    assert_eq!(next.to_rows(), vec!["..B.R".to_string(), "....D".to_string()]);
}

#[test]
fn defender_is_blocked_by_a_non_empty_cell() {
    // The second ring is not the target, but it still refuses the
    // defender's first step.
    let board = Board::from_rows(&["B....R", "...DR."]).unwrap();

    let (next, _) = advance_turn(&board, 1);

    assert_eq!(next.to_rows(), vec!["..B..R".to_string(), "...DR.".to_string()]);
}
