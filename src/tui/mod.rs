//! Live study session screen.
//!
//! A full-screen terminal interface bound to the tracker: module
//! selection, a live elapsed-time readout, and start/pause/end
//! keybindings. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::App;

use std::io;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::error::SwotError;
use crate::study::StudyTracker;

/// Run the live session screen.
///
/// # Errors
///
/// Returns an error if the terminal fails to initialize or a tracker
/// operation fails mid-session.
pub fn run(tracker: &mut StudyTracker, preselect: Option<&str>) -> Result<(), SwotError> {
    // Setup terminal
    enable_raw_mode().map_err(|e| SwotError::Config(format!("failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| SwotError::Config(format!("failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| SwotError::Config(format!("failed to create terminal: {e}")))?;

    let mut app = App::new(tracker, preselect);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App<'_>) -> Result<(), SwotError> {
    loop {
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| SwotError::Config(format!("failed to draw: {e}")))?;

        if let Some(action) = event::handle_events(app)? {
            match action {
                event::Action::Quit => break,
                event::Action::Toggle => app.toggle_timer(),
                event::Action::End => app.end_session()?,
                event::Action::Undo => app.undo_selected()?,
                event::Action::Remove => app.remove_selected()?,
            }
        }
    }

    Ok(())
}
