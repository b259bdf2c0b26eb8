//! Board storage, shuffling and win detection.
//!
//! This module contains the [`Board`] type, which owns the sixteen tiles of a puzzle in row-major
//! order. Tiles are never created or destroyed after a board is built, only swapped, so the values
//! on a board always form a permutation of `0..=15`.

use std::fmt;

use rand::Rng;
use tracing::{debug, trace};

use crate::{
    coords::{grid_position, CELL_COUNT, GRID_SIZE},
    error::PuzzleError,
    tile::Tile,
};

/// Storage length of a board.
const CELLS: usize = CELL_COUNT as usize;

/// The sixteen cells of a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    /// Tiles in row-major order, so the tile at `(row, col)` lives at `row * 4 + col`.
    cells: [Tile; CELLS],
}

impl Default for Board {
    fn default() -> Self {
        Self::solved()
    }
}

impl Board {
    /// Builds the solved board: `1..=15` in order with the blank last.
    #[must_use]
    pub fn solved() -> Self {
        let mut cells = [Tile::BLANK; CELLS];
        for (value, cell) in (1..CELL_COUNT).zip(cells.iter_mut()) {
            *cell = Tile::new(value);
        }

        Self { cells }
    }

    /// Builds a board from a uniformly random permutation of `0..=15`.
    ///
    /// Cells are filled row-major. For each cell a value is drawn uniformly from the values that
    /// are still unused and removed from that pool, so a seeded source always produces the same
    /// board.
    pub fn shuffled_new<R: Rng>(rng: &mut R) -> Self {
        let mut pool: Vec<u8> = (0..CELL_COUNT).collect();
        let mut cells = [Tile::BLANK; CELLS];

        for cell in &mut cells {
            let pick = rng.gen_range(0..pool.len());
            *cell = Tile::new(pool.remove(pick));
        }

        let board = Self { cells };
        debug!(board = %board.values_repr(), "shuffled new board");

        board
    }

    /// Draws shuffled boards until one that can be solved comes up.
    ///
    /// Half of all permutations cannot reach the solved arrangement through legal moves; see
    /// [`Board::is_solvable`].
    pub fn shuffled_solvable<R: Rng>(rng: &mut R) -> Self {
        loop {
            let board = Self::shuffled_new(rng);
            if board.is_solvable() {
                return board;
            }
            trace!("discarding unsolvable shuffle");
        }
    }

    /// Wraps a caller-supplied 4x4 arrangement, first row first.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidArrangement`] if the values are not a permutation of
    /// `0..=15`.
    pub fn from_grid(grid: [[Tile; 4]; 4]) -> Result<Self, PuzzleError> {
        let mut cells = [Tile::BLANK; CELLS];
        for (cell, tile) in cells.iter_mut().zip(grid.iter().flatten()) {
            *cell = *tile;
        }

        Self::validated(cells)
    }

    /// Builds a board from sixteen values in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::InvalidArrangement`] if there are not exactly sixteen values or if
    /// they are not a permutation of `0..=15`.
    pub fn from_values(values: &[u8]) -> Result<Self, PuzzleError> {
        let cells: [u8; CELLS] = values.try_into().map_err(|_err| {
            PuzzleError::InvalidArrangement(format!(
                "expected {CELLS} tiles, got {}",
                values.len()
            ))
        })?;

        Self::validated(cells.map(Tile::new))
    }

    /// Checks that `cells` hold every value in `0..=15` exactly once.
    fn validated(cells: [Tile; CELLS]) -> Result<Self, PuzzleError> {
        let mut seen = [false; CELLS];
        for tile in cells {
            let slot = seen.get_mut(usize::from(tile.value())).ok_or_else(|| {
                PuzzleError::InvalidArrangement(format!("tile {} is out of range", tile.value()))
            })?;
            if *slot {
                return Err(PuzzleError::InvalidArrangement(format!(
                    "tile {} appears more than once",
                    tile.value()
                )));
            }
            *slot = true;
        }

        Ok(Self { cells })
    }

    /// Returns the tiles in row-major order.
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; CELLS] {
        &self.cells
    }

    /// Returns the tile at the given grid position, or `None` outside the grid.
    #[must_use]
    pub fn tile_at(&self, row: u8, col: u8) -> Option<Tile> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }

        self.cells
            .get(usize::from(row * GRID_SIZE + col))
            .copied()
    }

    /// Returns the flat index of the first cell, in row-major order, holding a tile equal to
    /// `tile`.
    #[must_use]
    pub fn find_flat_index(&self, tile: Tile) -> Option<u8> {
        (0..CELL_COUNT)
            .zip(self.cells.iter())
            .find_map(|(idx, cell)| (*cell == tile).then_some(idx))
    }

    /// Returns the flat index of the blank.
    #[must_use]
    pub fn blank_index(&self) -> Option<u8> {
        self.find_flat_index(Tile::BLANK)
    }

    /// Exchanges the tiles at two flat indices.
    ///
    /// Swapping an index with itself leaves the board unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`PuzzleError::FlatIndexOutOfRange`] if either index is outside `0..=15`; the board
    /// is left unchanged in that case.
    pub fn swap(&mut self, first: u8, second: u8) -> Result<(), PuzzleError> {
        for index in [first, second] {
            if index >= CELL_COUNT {
                return Err(PuzzleError::FlatIndexOutOfRange(index));
            }
        }

        self.cells.swap(usize::from(first), usize::from(second));

        Ok(())
    }

    /// Returns whether every tile sits at its correct position.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        (0..CELL_COUNT).zip(self.cells.iter()).all(|(idx, tile)| {
            let (row, col) = grid_position(idx);
            tile.is_at_correct_position(row, col)
        })
    }

    /// Returns whether the solved arrangement can be reached from this board.
    ///
    /// On a board of even width the arrangement is solvable exactly when the number of inversions
    /// among the numbered tiles plus the row of the blank, counted from the top, is odd.
    #[must_use]
    pub fn is_solvable(&self) -> bool {
        let blank_row = self
            .blank_index()
            .map_or(0, |idx| usize::from(grid_position(idx).0));

        (self.inversions() + blank_row) % 2 == 1
    }

    /// Counts pairs of numbered tiles that appear in the wrong relative order.
    fn inversions(&self) -> usize {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, tile)| !tile.is_blank())
            .map(|(idx, tile)| {
                self.cells
                    .iter()
                    .skip(idx + 1)
                    .filter(|next| !next.is_blank() && next.value() < tile.value())
                    .count()
            })
            .sum()
    }

    /// Formats the values on a single line for log records.
    fn values_repr(&self) -> String {
        self.cells
            .iter()
            .map(|tile| tile.value().to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(usize::from(GRID_SIZE)) {
            let line = row
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "{line}")?;
        }

        Ok(())
    }
}
