//! Frame composition for the host renderer.
//!
//! A [`Scene`] is a flat list of [`Sprite`]s placed at canvas coordinates. The engine builds one
//! per frame from the board; the host decides how to draw it.

use ratatui::style::Color;

use crate::{
    board::Board,
    coords::{self, grid_position, CANVAS_SIZE, CELL_COUNT},
    error::PuzzleError,
    tile::BORDER_COLOR,
    types::{Shape, Sprite},
};

/// Text shown on the end-of-game banner.
pub const VICTORY_TEXT: &str = "You won!";

/// Fill of the end-of-game banner.
pub const BANNER_COLOR: Color = Color::Rgb(255, 175, 175);

/// Width of the end-of-game banner, in canvas pixels.
const BANNER_WIDTH: u16 = 300;

/// Height of the end-of-game banner, in canvas pixels.
const BANNER_HEIGHT: u16 = 200;

/// Font size of the victory text.
const BANNER_FONT_SIZE: u16 = 30;

/// A sprite positioned on the canvas.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Placement {
    /// What to draw.
    pub sprite: Sprite,
    /// Horizontal position of the sprite's center.
    pub x: u16,
    /// Vertical position of the sprite's center, growing downwards.
    pub y: u16,
}

/// Description of one frame, in drawing order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Scene {
    /// Canvas width in pixels.
    pub width: u16,
    /// Canvas height in pixels.
    pub height: u16,
    /// Placed sprites, later ones drawn over earlier ones.
    pub placements: Vec<Placement>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Creates an empty frame covering the whole canvas.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
            placements: Vec::new(),
        }
    }

    /// Places `sprite` centered on `(x, y)`.
    pub fn place(&mut self, sprite: Sprite, x: u16, y: u16) {
        self.placements.push(Placement { sprite, x, y });
    }
}

/// Builds the frame for the current board.
///
/// A solved board yields [`last_scene`]. Otherwise every cell contributes its tile's sprite,
/// highlighted when the tile is at its correct position, centered on the cell. The x coordinate
/// comes from the column and the y coordinate from the row.
///
/// # Errors
///
/// Returns [`PuzzleError::OutOfRange`] if a cell falls outside the canvas.
pub fn build_frame(board: &Board) -> Result<Scene, PuzzleError> {
    if board.is_solved() {
        return Ok(last_scene("Over"));
    }

    let mut scene = Scene::new();
    for (idx, tile) in (0..CELL_COUNT).zip(board.tiles().iter()) {
        let (row, col) = grid_position(idx);
        let sprite = tile.render(tile.is_at_correct_position(row, col));
        scene.place(sprite, cell_center(col)?, cell_center(row)?);
    }

    Ok(scene)
}

/// Builds the end-of-game frame.
///
/// The frame is a pink banner in the middle of the canvas reading [`VICTORY_TEXT`]. The banner
/// always shows that text; `_message` does not change the frame.
#[must_use]
pub fn last_scene(_message: &str) -> Scene {
    let center = CANVAS_SIZE / 2;

    let mut scene = Scene::new();
    scene.place(
        Sprite::new(vec![Shape::Rectangle {
            width: BANNER_WIDTH,
            height: BANNER_HEIGHT,
            color: BANNER_COLOR,
        }]),
        center,
        center,
    );
    scene.place(
        Sprite::new(vec![Shape::Text {
            content: VICTORY_TEXT.to_owned(),
            size: BANNER_FONT_SIZE,
            color: BORDER_COLOR,
        }]),
        center,
        center,
    );

    scene
}

/// Maps a row or column number to the canvas coordinate of the cell center.
fn cell_center(index: u8) -> Result<u16, PuzzleError> {
    coords::index_to_coord(i32::from(index))
}
