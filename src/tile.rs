//! Tile values and their renderable descriptors.

use std::fmt;

use ratatui::style::Color;

use crate::{
    coords::{CELL_COUNT, GRID_SIZE},
    error::PuzzleError,
    types::{Shape, Sprite},
};

/// Edge length of the dark square framing every tile.
pub(crate) const TILE_FRAME_SIZE: u16 = 100;

/// Edge length of the colored square inset in the frame.
pub(crate) const TILE_INSET_SIZE: u16 = 90;

/// Font size of the number drawn on a tile.
pub(crate) const TILE_FONT_SIZE: u16 = 30;

/// Color of the frame around every tile and of the numbers.
pub const BORDER_COLOR: Color = Color::Black;

/// Fill of the blank tile.
pub const BLANK_COLOR: Color = Color::White;

/// Fill of a numbered tile sitting at its correct position.
pub const CORRECT_COLOR: Color = Color::Rgb(255, 200, 0);

/// Fill of a numbered tile away from its correct position.
pub const MISPLACED_COLOR: Color = Color::Rgb(0, 255, 255);

/// A single puzzle tile.
///
/// The value `0` denotes the blank cell; every other value is the number printed on the tile. Tiles
/// compare and hash by value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tile {
    /// Number on the tile, `0` for the blank.
    value: u8,
}

impl Tile {
    /// The blank tile.
    pub const BLANK: Self = Self::new(0);

    /// Builds a tile holding `value`, which must lie in `0..=15`.
    #[must_use]
    pub(crate) const fn new(value: u8) -> Self {
        Self { value }
    }

    /// Returns the number on the tile.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.value
    }

    /// Returns whether this is the blank tile.
    #[must_use]
    pub const fn is_blank(self) -> bool {
        self.value == 0
    }

    /// Returns whether the tile belongs at the given grid position.
    ///
    /// The blank belongs in the bottom-right cell. A numbered tile `v` belongs where
    /// `v == row * 4 + col + 1`.
    #[must_use]
    pub fn is_at_correct_position(self, row: u8, col: u8) -> bool {
        if self.is_blank() {
            row == GRID_SIZE - 1 && col == GRID_SIZE - 1
        } else {
            // Widened so out-of-grid positions cannot overflow.
            u16::from(self.value) == u16::from(row) * u16::from(GRID_SIZE) + u16::from(col) + 1
        }
    }

    /// Produces the renderable descriptor for this tile.
    ///
    /// The blank is a light square in a dark frame and ignores `highlight_correct`. A numbered tile
    /// is filled with [`CORRECT_COLOR`] or [`MISPLACED_COLOR`] depending on `highlight_correct`,
    /// with its number centered on top.
    #[must_use]
    pub fn render(self, highlight_correct: bool) -> Sprite {
        let frame = Shape::Rectangle {
            width: TILE_FRAME_SIZE,
            height: TILE_FRAME_SIZE,
            color: BORDER_COLOR,
        };

        if self.is_blank() {
            return Sprite::new(vec![
                frame,
                Shape::Rectangle {
                    width: TILE_INSET_SIZE,
                    height: TILE_INSET_SIZE,
                    color: BLANK_COLOR,
                },
            ]);
        }

        let fill = if highlight_correct {
            CORRECT_COLOR
        } else {
            MISPLACED_COLOR
        };

        Sprite::new(vec![
            frame,
            Shape::Rectangle {
                width: TILE_INSET_SIZE,
                height: TILE_INSET_SIZE,
                color: fill,
            },
            Shape::Text {
                content: self.value.to_string(),
                size: TILE_FONT_SIZE,
                color: BORDER_COLOR,
            },
        ])
    }
}

impl TryFrom<u8> for Tile {
    type Error = PuzzleError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value >= CELL_COUNT {
            return Err(PuzzleError::InvalidArrangement(format!(
                "tile {value} is out of range"
            )));
        }

        Ok(Self::new(value))
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_blank() {
            write!(f, "{:>2}", "")
        } else {
            write!(f, "{:>2}", self.value)
        }
    }
}
