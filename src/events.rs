//! Event handling functions for user input and application state updates.

use std::time::Duration;

use color_eyre::eyre::Result;
use ratatui::crossterm::event::{self, Event, KeyCode, KeyEventKind};
use tracing::debug;

use crate::App;

/// Handles input events and updates the application state accordingly.
///
/// This function polls for keyboard events and dispatches key presses to [`handle_key`]. It uses a
/// timeout to avoid blocking the UI.
pub(crate) fn handle_events(app: &mut App) -> Result<()> {
    if event::poll(Duration::from_millis(100))? {
        if let Event::Key(key) = event::read()? {
            if key.kind == KeyEventKind::Press {
                handle_key(app, key.code);
            }
        }
    }

    Ok(())
}

/// Handles a single key press.
///
/// Quit keys end the loop. Movement keys are forwarded to the session as command strings until the
/// puzzle is solved; after that the board is frozen on the victory screen.
pub(crate) fn handle_key(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => app.exit = true,
        _ => {
            let Some(command) = command_for(code) else {
                return;
            };

            if app.session.is_solved() {
                debug!(command, "puzzle already solved, input dropped");
                return;
            }

            let _ = app.session.handle_input(command);
        }
    }
}

/// Maps a key to the command string it produces, if any.
///
/// Arrow keys and `w`/`a`/`s`/`d` name the direction the tile next to the blank slides in.
pub(crate) const fn command_for(code: KeyCode) -> Option<&'static str> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some("up"),
        KeyCode::Down | KeyCode::Char('s') => Some("down"),
        KeyCode::Left | KeyCode::Char('a') => Some("left"),
        KeyCode::Right | KeyCode::Char('d') => Some("right"),
        _ => None,
    }
}
