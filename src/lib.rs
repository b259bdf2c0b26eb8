//! A sliding 15-puzzle played in the terminal.
//!
//! The puzzle engine lives in [`board`], [`moves`], [`game`] and [`scene`]: it shuffles a 4x4 board,
//! slides tiles into the blank on directional commands, detects the win and describes each frame
//! as sprites on a 400x400 canvas. [`App`] hosts the engine in a Ratatui terminal.

#![expect(
    clippy::cargo_common_metadata,
    reason = "Temporary allow during development."
)]

mod app;
pub mod board;
pub mod config;
pub mod coords;
pub mod error;
mod events;
pub mod game;
pub mod logging;
pub mod moves;
pub mod scene;
pub mod tile;
pub mod types;
mod ui;

pub use app::App;
pub use board::Board;
pub use config::Config;
pub use error::PuzzleError;
pub use game::Session;
pub use scene::Scene;
pub use tile::Tile;
pub use types::{Direction, SessionState, Shape, Sprite};
