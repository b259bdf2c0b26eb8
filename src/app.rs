//! Core application state and logic for the puzzle game.

use color_eyre::eyre::Result;
use ratatui::DefaultTerminal;
use tracing::info;

use crate::{events, game::Session, ui};

/// Application state container for the puzzle game.
///
/// This structure holds the state of the application, which is to say the structure from which
/// Ratatui will render the game and Crossterm events will help writing to.
pub struct App {
    /// Application exit flag.
    ///
    /// This field indicates whether the application should exit. It is set to `true` when the user
    /// wants to quit the game but it starts off `false`.
    pub(crate) exit: bool,
    /// The puzzle being played.
    pub(crate) session: Session,
}

impl App {
    /// Creates a new application around an already initialized session.
    #[must_use]
    pub const fn new(session: Session) -> Self {
        Self {
            exit: false,
            session,
        }
    }

    /// Returns the session being played.
    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    /// Runs the main loop of the application.
    ///
    /// This function draws a frame, then handles at most one input event, until the exit condition
    /// is `true`, after which the function returns to the call site.
    ///
    /// # Errors
    ///
    /// - [`std::io::Error`]
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        info!(board = %self.session.board(), "starting game");

        while !self.exit {
            let _ = terminal.try_draw(|frame| ui::draw(self, frame).map_err(std::io::Error::other))?;
            events::handle_events(self)?;
        }

        info!(
            moves = self.session.move_count(),
            solved = self.session.is_solved(),
            "leaving game"
        );

        Ok(())
    }
}
