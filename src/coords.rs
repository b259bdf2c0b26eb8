//! Coordinate mapping between grid indices and canvas pixels.
//!
//! This module contains the constants that describe the canvas the puzzle is laid out on and the
//! transformation from a row or column number to the pixel coordinate of that cell's center.

use crate::error::PuzzleError;

/// Number of rows and columns in the puzzle grid.
pub const GRID_SIZE: u8 = 4;

/// Number of cells in the puzzle grid.
pub const CELL_COUNT: u8 = GRID_SIZE * GRID_SIZE;

/// Edge length of a single cell, in canvas pixels.
pub const CELL_SIZE: u16 = 100;

/// Edge length of the square canvas a frame is composed on, in canvas pixels.
pub const CANVAS_SIZE: u16 = 400;

/// Largest index accepted by [`index_to_coord`].
///
/// One past the last row or column is still accepted so that the edge of the canvas can be
/// addressed.
const MAX_INDEX: u16 = 4;

/// Converts a row or column number to the pixel coordinate of the cell's center.
///
/// A column number yields an x coordinate and a row number yields a y coordinate. The result is
/// `index * 100 + 50`.
///
/// # Errors
///
/// Returns [`PuzzleError::OutOfRange`] if `index` is outside `0..=4`.
pub fn index_to_coord(index: i32) -> Result<u16, PuzzleError> {
    match u16::try_from(index) {
        Ok(idx) if idx <= MAX_INDEX => Ok(idx * CELL_SIZE + CELL_SIZE / 2),
        _ => Err(PuzzleError::OutOfRange(index)),
    }
}

/// Splits a flat index into its `(row, col)` grid position.
pub(crate) const fn grid_position(index: u8) -> (u8, u8) {
    (index / GRID_SIZE, index % GRID_SIZE)
}
