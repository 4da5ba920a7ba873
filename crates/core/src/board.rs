//! Board module - manages the game grid
//!
//! The board is a fixed-size grid where each cell is either empty or filled with
//! the kind of shape that locked there. Storage is a flat row-major vector whose
//! size is set once at construction.
//! Coordinates: (row, col) where row 0 is the top and col 0 the left edge.

use thiserror::Error;

use crate::pieces::Shape;
use crate::types::{Cell, ShapeKind};

/// Errors reported by board queries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("cell ({row}, {col}) is outside the board")]
    OutOfRange { row: i32, col: i32 },
}

/// The game board - `height` rows x `width` columns using flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    width: usize,
    height: usize,
    /// Flat array of cells, row-major order (row * width + col)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![None; width * height],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    fn index(&self, row: i32, col: i32) -> Option<usize> {
        if self.is_out_of_bounds(row, col) {
            return None;
        }
        Some((row as usize) * self.width + (col as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get height of the board
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get cell at position (row, col)
    /// Returns None if out of bounds
    pub fn get(&self, row: i32, col: i32) -> Option<Cell> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at position (row, col)
    /// Returns false if out of bounds
    pub fn set(&mut self, row: i32, col: i32, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check whether the cell at (row, col) is filled
    pub fn is_occupied(&self, row: i32, col: i32) -> Result<bool, BoardError> {
        self.get(row, col)
            .map(|cell| cell.is_some())
            .ok_or(BoardError::OutOfRange { row, col })
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, row: i32, col: i32) -> bool {
        row < 0 || col < 0 || row as usize >= self.height || col as usize >= self.width
    }

    /// Check whether `shape` placed with its top-left cell at (row, col) would collide.
    ///
    /// For each occupied cell the checks run in a fixed order: the walls, then the
    /// floor, then occupancy. Cells above the top edge (negative rows) never collide.
    pub fn collides(&self, shape: &Shape, row: i32, col: i32) -> bool {
        shape.cells().any(|(dr, dc)| {
            let r = row + dr;
            let c = col + dc;

            if c < 0 || c as usize >= self.width {
                return true;
            }
            if r >= self.height as i32 {
                return true;
            }
            r >= 0 && matches!(self.is_occupied(r, c), Ok(true))
        })
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= self.height {
            return false;
        }
        self.row(row).iter().all(|cell| cell.is_some())
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Iterate rows from top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width.max(1)).take(self.height)
    }

    /// Clear all full rows in a single pass and return how many were removed
    ///
    /// Remaining rows keep their relative order and settle to the bottom; the
    /// same number of empty rows appear at the top.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = self.width;
        let mut cleared = 0;
        let mut write_row = self.height;

        // Scan from bottom to top
        for read_row in (0..self.height).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
            } else {
                write_row -= 1;
                if write_row != read_row {
                    let src_start = read_row * width;
                    let dst_start = write_row * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Clear the remaining rows at the top
        self.cells[..write_row * width].fill(None);

        cleared
    }

    /// Write every occupied cell of `shape` at (row, col) as filled with `kind`
    ///
    /// The placement is not re-validated: callers lock only positions that were
    /// just tested collision-free. Cells above the top edge are dropped.
    pub fn lock_piece(&mut self, shape: &Shape, row: i32, col: i32, kind: ShapeKind) {
        debug_assert!(!self.collides(shape, row, col));
        for (dr, dc) in shape.cells() {
            self.set(row + dr, col + dc, Some(kind));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells on the board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat storage)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        let height = cells_2d.len();
        let width = cells_2d.first().map_or(0, |row| row.len());
        assert!(cells_2d.iter().all(|row| row.len() == width));

        Self {
            width,
            height,
            cells: cells_2d.into_iter().flatten().collect(),
        }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.rows().map(|row| row.to_vec()).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::DEFAULT_HEIGHT, crate::types::DEFAULT_WIDTH)
    }
}
