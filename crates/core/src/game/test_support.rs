//! Shared fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating board setup across many tests.
//! It does not own production game logic.

use super::*;
use crate::state::Board;

pub(super) fn pos(row: i32, col: i32) -> Pos {
    Pos { row, col }
}

/// The reference half-court: a carrier with three teammates, five defenders
/// screening the left side, rings on both baselines.
pub(super) fn half_court_fixture() -> Board {
    Board::from_rows(&[
        ".D.D.......",
        "..A........",
        "RDBA......R",
        ".ADA.......",
        ".D.........",
    ])
    .unwrap()
}
