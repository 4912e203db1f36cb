//! Board module - the rectangular grid of colored tiles
//!
//! Flat row-major storage for cache locality; dimensions come from the
//! level config at construction and never change afterwards.
//! Coordinates: (row, col) with row 0 at the bottom (gravity pulls toward
//! decreasing row index).

use crate::core::rng::SimpleRng;
use crate::types::{Cell, ColorId, Coord};

/// The game board: `rows x cols` cells, each empty or holding one color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat array of cells, row-major order (row * cols + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        }
    }

    /// Build a board from rows listed bottom-to-top (index 0 = bottom row).
    /// Every row must have the same length. Useful for fixtures and replays.
    pub fn from_rows(rows: &[Vec<Cell>]) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        assert!(rows.iter().all(|row| row.len() == cols));

        let mut board = Self::new(rows.len(), cols);
        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                board.set(r, c, cell);
            }
        }
        board
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(row * self.cols + col)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Get the occupant of (row, col).
    /// Fails softly: out-of-bounds coordinates read as empty.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.index(row, col).and_then(|idx| self.cells[idx])
    }

    /// Set the cell at (row, col); the single mutation point of the grid.
    /// Returns false (and changes nothing) if out of bounds.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within the grid
    pub fn in_bounds(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Check if position is within bounds and holds a tile
    pub fn is_occupied(&self, row: usize, col: usize) -> bool {
        self.get(row, col).is_some()
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Row-major iterator over all coordinates (bottom row first).
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Coord::new(row, col)))
    }

    /// Row-major iterator over occupied coordinates.
    pub fn occupied_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(|&at| self.is_occupied(at.row, at.col))
    }

    /// Assign every cell a random catalog color (level load / board reset).
    pub fn fill_random(&mut self, rng: &mut SimpleRng, num_colors: u8) {
        for cell in &mut self.cells {
            *cell = Some(rng.next_color(num_colors));
        }
    }

    /// Multiset of colors currently on the board, as sorted ids.
    /// Conservation checks compare these before/after gravity and shuffle.
    pub fn color_counts(&self) -> Vec<ColorId> {
        let mut colors: Vec<ColorId> = self.cells.iter().filter_map(|&cell| cell).collect();
        colors.sort_unstable();
        colors
    }
}
