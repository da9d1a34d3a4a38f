//! Matrix module - the grid of locked minos
//!
//! The matrix is 10 columns by 22 rows. Rows 0-1 are a hidden buffer above the
//! visible playfield. Coordinates are (col, row) with row 0 at the top.
//! Each cell owns at most one [`Mino`]; minos move in and out by value.

use arrayvec::ArrayVec;

use crate::piece::Mino;
use crate::types::{MAX_CLEARED_ROWS, WELL_HEIGHT, WELL_WIDTH};

pub type Row = [Option<Mino>; WELL_WIDTH];

const EMPTY_CELL: Option<Mino> = None;
const EMPTY_ROW: Row = [EMPTY_CELL; WELL_WIDTH];

/// Fixed-size grid of optional minos
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix {
    rows: [Row; WELL_HEIGHT],
}

impl Matrix {
    /// Create an empty matrix
    pub fn new() -> Self {
        Self {
            rows: [EMPTY_ROW; WELL_HEIGHT],
        }
    }

    pub fn width(&self) -> usize {
        WELL_WIDTH
    }

    pub fn height(&self) -> usize {
        WELL_HEIGHT
    }

    #[inline(always)]
    fn index(col: i32, row: i32) -> Option<(usize, usize)> {
        if col < 0 || col >= WELL_WIDTH as i32 || row < 0 || row >= WELL_HEIGHT as i32 {
            return None;
        }
        Some((col as usize, row as usize))
    }

    pub fn in_bounds(&self, col: i32, row: i32) -> bool {
        Self::index(col, row).is_some()
    }

    /// Cell at (col, row), or `None` when out of bounds
    pub fn get(&self, col: i32, row: i32) -> Option<&Option<Mino>> {
        Self::index(col, row).map(|(c, r)| &self.rows[r][c])
    }

    /// Mutable cell at (col, row), or `None` when out of bounds
    pub fn get_mut(&mut self, col: i32, row: i32) -> Option<&mut Option<Mino>> {
        Self::index(col, row).map(move |(c, r)| &mut self.rows[r][c])
    }

    /// Replace a cell, returning false if out of bounds
    pub fn set(&mut self, col: i32, row: i32, cell: Option<Mino>) -> bool {
        match self.get_mut(col, row) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// In bounds and holding a mino
    pub fn is_occupied(&self, col: i32, row: i32) -> bool {
        matches!(self.get(col, row), Some(Some(_)))
    }

    pub fn row(&self, row: usize) -> &Row {
        &self.rows[row]
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn is_row_full(&self, row: usize) -> bool {
        row < WELL_HEIGHT && self.rows[row].iter().all(Option::is_some)
    }

    pub fn is_row_empty(&self, row: usize) -> bool {
        row < WELL_HEIGHT && self.rows[row].iter().all(Option::is_none)
    }

    /// Indices of every full row, top to bottom.
    ///
    /// Panics if more than four rows are full: a single piece can't complete more,
    /// so any such board is corrupt.
    pub fn full_rows(&self) -> ArrayVec<usize, MAX_CLEARED_ROWS> {
        let mut full = ArrayVec::new();
        for row in (0..WELL_HEIGHT).filter(|&r| self.is_row_full(r)) {
            assert!(
                full.try_push(row).is_ok(),
                "more than {MAX_CLEARED_ROWS} rows are full at once"
            );
        }
        full
    }

    /// Empty a row in place (the row itself stays)
    pub fn clear_row(&mut self, row: usize) {
        self.rows[row] = EMPTY_ROW;
    }

    pub fn swap_rows(&mut self, a: usize, b: usize) {
        self.rows.swap(a, b);
    }

    pub fn occupied_count(&self) -> usize {
        self.rows.iter().flatten().filter(|c| c.is_some()).count()
    }
}

impl Default for Matrix {
    fn default() -> Self {
        Self::new()
    }
}
