//! Event handling for the live session screen.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyModifiers};

use crate::error::SwotError;
use crate::tui::app::App;

/// Action to take after handling an event.
pub enum Action {
    /// Quit the application.
    Quit,
    /// Start or pause the session timer.
    Toggle,
    /// End the session and record it.
    End,
    /// Drop the selected module's most recent session.
    Undo,
    /// Remove the selected module.
    Remove,
}

/// Handle terminal events.
///
/// Returns an action to take, or None if no action is needed. The poll
/// timeout doubles as the live-timer redraw cadence: the caller redraws
/// on every return, so the elapsed readout refreshes at least four times
/// a second while nothing is pressed.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App<'_>) -> Result<Option<Action>, SwotError> {
    if event::poll(Duration::from_millis(250))
        .map_err(|e| SwotError::Config(format!("event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| SwotError::Config(format!("event read failed: {e}")))?
        {
            // Ctrl+C always quits, live session or not.
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                return Ok(Some(Action::Quit));
            }

            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    if app.request_quit() {
                        return Ok(Some(Action::Quit));
                    }
                }

                // Navigation - vim style
                KeyCode::Char('j') | KeyCode::Down => app.select_next(),
                KeyCode::Char('k') | KeyCode::Up => app.select_previous(),

                // Session lifecycle
                KeyCode::Char(' ') => return Ok(Some(Action::Toggle)),
                KeyCode::Char('e') | KeyCode::Enter => return Ok(Some(Action::End)),

                // Log management
                KeyCode::Char('u') => return Ok(Some(Action::Undo)),
                KeyCode::Char('x') => return Ok(Some(Action::Remove)),

                // Help
                KeyCode::Char('?') => {
                    app.cancel_pending();
                    app.status = Some(
                        "j/k:select | Space:start/pause | e:end | u:undo | x:remove | q:quit"
                            .to_string(),
                    );
                }

                _ => app.cancel_pending(),
            }
        }
    }

    Ok(None)
}
