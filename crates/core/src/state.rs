use std::collections::BTreeMap;

use crate::types::{CellKind, LayoutError, Pos};

/// Fixed-size rectangular board. Cells are stored row-major; dimensions never
/// change after construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<CellKind>,
}

impl Board {
    /// Parses a board from rows of the `.DABR` layout alphabet.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Board, LayoutError> {
        let height = rows.len();
        if height == 0 {
            return Err(LayoutError::EmptyLayout);
        }
        let width = rows[0].as_ref().chars().count();
        if width == 0 {
            return Err(LayoutError::EmptyLayout);
        }

        let mut cells = Vec::with_capacity(width * height);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            if line.chars().count() != width {
                return Err(LayoutError::RaggedRow { row });
            }
            for (col, symbol) in line.chars().enumerate() {
                let kind = CellKind::from_char(symbol)
                    .ok_or(LayoutError::UnknownSymbol { row, col, symbol })?;
                cells.push(kind);
            }
        }

        Ok(Board { width, height, cells })
    }

    /// Same dimensions, every cell cleared to `Empty` except the rings, which
    /// are static terrain and survive every turn.
    pub fn cleared_keeping_rings(&self) -> Board {
        let cells = self
            .cells
            .iter()
            .map(|&kind| if kind == CellKind::Ring { CellKind::Ring } else { CellKind::Empty })
            .collect();
        Board { width: self.width, height: self.height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, pos: Pos) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && (pos.row as usize) < self.height
            && (pos.col as usize) < self.width
    }

    /// Cell lookup as a total function: out-of-bounds reads behave like a
    /// blocked cell, so bounds checks never leak into traversal loops.
    pub fn cell_at(&self, pos: Pos) -> CellKind {
        if !self.in_bounds(pos) {
            return CellKind::Defender;
        }
        self.cells[self.index(pos)]
    }

    pub fn set_cell(&mut self, pos: Pos, kind: CellKind) {
        if !self.in_bounds(pos) {
            return;
        }
        let idx = self.index(pos);
        self.cells[idx] = kind;
    }

    /// Positions holding each requested kind, in row-major scan order.
    pub fn find_actors(&self, kinds: &[CellKind]) -> BTreeMap<CellKind, Vec<Pos>> {
        let mut found: BTreeMap<CellKind, Vec<Pos>> =
            kinds.iter().map(|&kind| (kind, Vec::new())).collect();
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Pos { row: row as i32, col: col as i32 };
                if let Some(positions) = found.get_mut(&self.cell_at(pos)) {
                    positions.push(pos);
                }
            }
        }
        found
    }

    /// The ring with the maximal column index; the earliest scan position
    /// wins if several rings share that column.
    pub fn target_ring(&self) -> Option<Pos> {
        let mut best: Option<Pos> = None;
        for row in 0..self.height {
            for col in 0..self.width {
                let pos = Pos { row: row as i32, col: col as i32 };
                if self.cell_at(pos) == CellKind::Ring
                    && best.is_none_or(|ring| pos.col > ring.col)
                {
                    best = Some(pos);
                }
            }
        }
        best
    }

    pub fn to_rows(&self) -> Vec<String> {
        (0..self.height)
            .map(|row| {
                (0..self.width)
                    .map(|col| {
                        self.cell_at(Pos { row: row as i32, col: col as i32 }).to_char()
                    })
                    .collect()
            })
            .collect()
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.row as usize) * self.width + (pos.col as usize)
    }
}
