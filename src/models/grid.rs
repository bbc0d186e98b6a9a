// file: src/models/grid.rs
// description: per-file table of cells and the growable aggregate table
// reference: internal data structures

use super::cell::Cell;
use std::path::PathBuf;

/// One loaded input table. Rows keep their own width.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: Vec<Vec<Cell>>) -> Self {
        Self { rows }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Widest row, zero for an empty grid.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }
}

/// A grid together with the file it was read from.
#[derive(Debug, Clone)]
pub struct LoadedTable {
    pub path: PathBuf,
    pub grid: Grid,
}

impl LoadedTable {
    pub fn new(path: impl Into<PathBuf>, grid: Grid) -> Self {
        Self {
            path: path.into(),
            grid,
        }
    }
}

/// Running max or sum table. Grows as taller or wider inputs are folded in;
/// positions never written hold [`Cell::ZERO`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateGrid {
    rows: Vec<Vec<Cell>>,
}

impl AggregateGrid {
    pub fn new() -> Self {
        Self::default()
    }

    /// Guarantees that `row` exists and is at least `width` cells wide.
    pub fn ensure_shape(&mut self, row: usize, width: usize) {
        if self.rows.len() <= row {
            self.rows.resize_with(row + 1, Vec::new);
        }
        let cells = &mut self.rows[row];
        if cells.len() < width {
            cells.resize(width, Cell::ZERO);
        }
    }

    pub fn get(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Mutable access that grows the table first.
    pub fn get_mut(&mut self, row: usize, column: usize) -> &mut Cell {
        self.ensure_shape(row, column + 1);
        &mut self.rows[row][column]
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
