//! Stable snapshot hashing for deterministic verification.
//! This module exists to keep hashing concerns separate from turn logic.
//! It does not own journal persistence or replay policy.

use std::hash::Hasher;

use xxhash_rust::xxh3::Xxh3;

use super::*;
use crate::state::Board;

impl Match {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.tick);
        hasher.write_u8(u8::from(self.goal_scored));
        write_board(&mut hasher, &self.board);
        hasher.finish()
    }
}

/// Hash of the board contents alone, used for per-tick replay checks.
pub fn board_hash(board: &Board) -> u64 {
    let mut hasher = Xxh3::new();
    write_board(&mut hasher, board);
    hasher.finish()
}

fn write_board(hasher: &mut Xxh3, board: &Board) {
    hasher.write_usize(board.width());
    hasher.write_usize(board.height());
    for row in 0..board.height() {
        for col in 0..board.width() {
            let kind = board.cell_at(Pos { row: row as i32, col: col as i32 });
            hasher.write_u8(kind.to_char() as u8);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_boards_hash_equal_and_one_cell_changes_it() {
        let left = Board::from_rows(&["RDBA......R"]).unwrap();
        let right = Board::from_rows(&["RDBA......R"]).unwrap();
        assert_eq!(board_hash(&left), board_hash(&right));

        let mut changed = right.clone();
        changed.set_cell(Pos { row: 0, col: 4 }, CellKind::Defender);
        assert_ne!(board_hash(&left), board_hash(&changed));
    }
}
