//! Sparse growable board

use super::{Pos, Stone};

/// Game board that grows on demand.
///
/// Rows are materialized lazily and may have different lengths; anything
/// outside the materialized area reads as [`Stone::Empty`]. Growth toward
/// negative coordinates prepends rows or columns, so after growing by `n`
/// a stone previously at `(r, c)` is found at `(r + n, c)` (or `(r, c + n)`).
/// Callers are responsible for that remapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<Stone>>,
}

impl Board {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    /// Number of materialized rows
    #[inline]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest materialized row
    pub fn col_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        pos.to_indices()
            .and_then(|(r, c)| self.rows.get(r)?.get(c).copied())
            .unwrap_or(Stone::Empty)
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos).is_empty()
    }

    /// Write a stone, materializing the row and column as needed.
    ///
    /// Negative positions are ignored; remap them with
    /// [`grow_negative_rows`](Self::grow_negative_rows) /
    /// [`grow_negative_cols`](Self::grow_negative_cols) first.
    pub fn set(&mut self, pos: Pos, stone: Stone) {
        let Some((r, c)) = pos.to_indices() else {
            return;
        };
        self.ensure_row(pos.row);
        let row = &mut self.rows[r];
        if row.len() <= c {
            row.resize(c + 1, Stone::Empty);
        }
        row[c] = stone;
    }

    /// Materialize every row up to and including `row`
    pub fn ensure_row(&mut self, row: i32) {
        if row < 0 {
            return;
        }
        let needed = row as usize + 1;
        if self.rows.len() < needed {
            self.rows.resize_with(needed, Vec::new);
        }
    }

    /// Prepend `n` empty rows
    pub fn grow_negative_rows(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        self.rows.splice(0..0, std::iter::repeat_with(Vec::new).take(n));
    }

    /// Prepend `n` empty cells to every existing row
    pub fn grow_negative_cols(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        for row in &mut self.rows {
            row.splice(0..0, std::iter::repeat(Stone::Empty).take(n));
        }
    }

    /// Every materialized cell, empty ones included, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, &stone)| (Pos::new(r as i32, c as i32), stone))
        })
    }

    /// Occupied cells only
    pub fn stones(&self) -> impl Iterator<Item = (Pos, Stone)> + '_ {
        self.cells().filter(|(_, stone)| !stone.is_empty())
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.stones().count()
    }

    /// Check if board has no stones
    pub fn is_board_empty(&self) -> bool {
        self.stones().next().is_none()
    }
}
