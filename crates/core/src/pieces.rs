//! Pieces module - shape matrices, the shape catalog and rotation
//!
//! A shape is a small boolean matrix (at most 4x4). Rotation is computed from
//! the current matrix every time (transpose, then reverse each row), so any
//! matrix can be rotated and four rotations always give back the original.

use crate::types::ShapeKind;

/// Largest number of rows or columns a shape matrix can have
pub const MAX_SHAPE_SIZE: usize = 4;

/// Offset of a single filled cell relative to the matrix's top-left corner, as (row, col)
pub type CellOffset = (i32, i32);

/// Boolean occupancy matrix of a piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from per-row bitmasks.
    ///
    /// Within a row mask, the most significant of the `cols` low bits is column 0.
    /// Masks beyond `rows` are ignored.
    pub const fn from_masks(rows: u8, cols: u8, masks: [u8; MAX_SHAPE_SIZE]) -> Self {
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut r = 0;
        while r < rows as usize && r < MAX_SHAPE_SIZE {
            let mut c = 0;
            while c < cols as usize && c < MAX_SHAPE_SIZE {
                bits[r][c] = (masks[r] >> ((cols as usize - 1 - c) as u8)) & 1 == 1;
                c += 1;
            }
            r += 1;
        }
        Self { rows, cols, bits }
    }

    /// Number of matrix rows
    pub fn rows(&self) -> usize {
        self.rows as usize
    }

    /// Number of matrix columns
    pub fn cols(&self) -> usize {
        self.cols as usize
    }

    /// Whether the matrix cell at (row, col) is occupied
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        row < self.rows() && col < self.cols() && self.bits[row][col]
    }

    /// Occupied cells as (row, col) offsets, in row-major order
    pub fn cells(&self) -> impl Iterator<Item = CellOffset> + '_ {
        (0..self.rows()).flat_map(move |r| {
            (0..self.cols())
                .filter(move |&c| self.bits[r][c])
                .map(move |c| (r as i32, c as i32))
        })
    }

    /// Index of the lowest matrix row holding an occupied cell
    pub fn bottom(&self) -> usize {
        self.cells().map(|(r, _)| r as usize).max().unwrap_or(0)
    }

    /// Rotate 90° clockwise.
    ///
    /// An R x C matrix becomes C x R with `new[x][R-1-y] = old[y][x]`.
    pub fn rotate(&self) -> Shape {
        let r = self.rows();
        let mut bits = [[false; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for y in 0..r {
            for x in 0..self.cols() {
                bits[x][r - 1 - y] = self.bits[y][x];
            }
        }
        Shape {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }
}

const SQUARE: Shape = Shape::from_masks(2, 2, [0b11, 0b11, 0, 0]);
const T: Shape = Shape::from_masks(2, 3, [0b010, 0b111, 0, 0]);
const Z: Shape = Shape::from_masks(2, 3, [0b110, 0b011, 0, 0]);
const S: Shape = Shape::from_masks(2, 3, [0b011, 0b110, 0, 0]);
const I: Shape = Shape::from_masks(4, 1, [0b1, 0b1, 0b1, 0b1]);

/// Get the spawn template for a shape kind
pub fn get_shape(kind: ShapeKind) -> Shape {
    match kind {
        ShapeKind::Square => SQUARE,
        ShapeKind::T => T,
        ShapeKind::Z => Z,
        ShapeKind::S => S,
        ShapeKind::I => I,
    }
}

/// Column shifts tried, in order, when placing a rotated shape
pub const WALL_KICKS: [i32; 3] = [0, -1, 1];

/// Try to rotate a shape with wall kicks
///
/// The rotated shape is tested at the unchanged column, then one column left,
/// then one column right. Returns `Some((rotated_shape, new_col))` for the
/// first placement where `collides` is false, `None` if all three collide.
pub fn try_rotate(
    shape: &Shape,
    row: i32,
    col: i32,
    collides: impl Fn(&Shape, i32, i32) -> bool,
) -> Option<(Shape, i32)> {
    let rotated = shape.rotate();

    WALL_KICKS
        .iter()
        .map(|&dc| col + dc)
        .find(|&new_col| !collides(&rotated, row, new_col))
        .map(|new_col| (rotated, new_col))
}
