//! Game session tying a board to the move engine.

use tracing::{info, trace};

use crate::{
    board::Board,
    error::PuzzleError,
    moves,
    scene::{self, Scene},
    types::{Direction, SessionState},
};

/// A single play-through of the puzzle.
///
/// The session owns its board for its whole lifetime. Moves mutate the board in place; the board
/// is never replaced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    /// The puzzle being played.
    board: Board,
    /// Number of moves that changed the board.
    moves: u32,
}

impl Session {
    /// Starts a session on the given board.
    #[must_use]
    pub const fn new(board: Board) -> Self {
        Self { board, moves: 0 }
    }

    /// Returns the board being played.
    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    /// Returns how many moves have changed the board so far.
    #[must_use]
    pub const fn move_count(&self) -> u32 {
        self.moves
    }

    /// Returns whether every tile is at its correct position.
    ///
    /// The check runs against the board every time; nothing is cached.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.board.is_solved()
    }

    /// Returns the lifecycle state of the session.
    #[must_use]
    pub fn state(&self) -> SessionState {
        if self.is_solved() {
            SessionState::Solved
        } else {
            SessionState::Playing
        }
    }

    /// Handles a command string from the host.
    ///
    /// Returns whether the board changed. Unrecognized commands and illegal moves are ignored.
    /// Moves are still accepted once the puzzle is solved.
    pub fn handle_input(&mut self, command: &str) -> bool {
        match Direction::parse(command) {
            Some(direction) => self.apply(direction),
            None => {
                trace!(command, "unrecognized command ignored");
                false
            }
        }
    }

    /// Slides a tile into the blank.
    ///
    /// Returns whether the board changed.
    pub fn apply(&mut self, direction: Direction) -> bool {
        let was_solved = self.is_solved();
        if !moves::apply_direction(&mut self.board, direction) {
            return false;
        }

        self.moves = self.moves.saturating_add(1);
        if !was_solved && self.is_solved() {
            info!(moves = self.moves, "puzzle solved");
        }

        true
    }

    /// Builds the frame describing the current state of the board.
    ///
    /// # Errors
    ///
    /// Returns an error if a cell of the board cannot be placed on the canvas.
    pub fn frame(&self) -> Result<Scene, PuzzleError> {
        scene::build_frame(&self.board)
    }
}
