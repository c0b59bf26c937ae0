//! Application state for the live session screen.

use crate::core::duration::{format_duration_hms, total_seconds};
use crate::error::SwotError;
use crate::study::{StudyTracker, TimerState};

/// Application state.
///
/// Holds the tracker plus the module selection; every mutation funnels
/// through the tracker's methods on this (single) event-handling thread.
pub struct App<'a> {
    /// The tracker driving timer and log state.
    tracker: &'a mut StudyTracker,
    /// Module names, sorted; refreshed after every module mutation.
    pub modules: Vec<String>,
    /// Currently selected index.
    pub selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Pending 'q' while a session is live (quit would discard it).
    pub pending_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new app instance.
    pub fn new(tracker: &'a mut StudyTracker, preselect: Option<&str>) -> Self {
        let modules: Vec<String> = tracker.modules().iter().map(ToString::to_string).collect();
        let selected = preselect
            .and_then(|name| modules.iter().position(|m| m == name))
            .unwrap_or(0);

        Self {
            tracker,
            modules,
            selected,
            status: Some("Press ? for help".to_string()),
            pending_quit: false,
        }
    }

    /// Re-read the module list from the tracker.
    fn refresh_modules(&mut self) {
        self.modules = self
            .tracker
            .modules()
            .iter()
            .map(ToString::to_string)
            .collect();

        if !self.modules.is_empty() && self.selected >= self.modules.len() {
            self.selected = self.modules.len() - 1;
        }
    }

    /// The currently selected module name.
    pub fn selected_module(&self) -> Option<&str> {
        self.modules.get(self.selected).map(String::as_str)
    }

    /// Move selection up.
    pub fn select_previous(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
        self.pending_quit = false;
    }

    /// Move selection down.
    pub fn select_next(&mut self) {
        if !self.modules.is_empty() && self.selected < self.modules.len() - 1 {
            self.selected += 1;
        }
        self.pending_quit = false;
    }

    /// Start or pause the session timer.
    pub fn toggle_timer(&mut self) {
        let state = self.tracker.start_or_pause();
        self.status = Some(if state == TimerState::Running {
            "Session running - Space to pause".to_string()
        } else {
            "Session paused - Space to resume".to_string()
        });
        self.pending_quit = false;
    }

    /// End the session and record it against the selected module.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the session fails.
    pub fn end_session(&mut self) -> Result<(), SwotError> {
        self.pending_quit = false;
        let Some(name) = self.selected_module().map(ToString::to_string) else {
            self.status = Some("No module - add one with 'swot module add'".to_string());
            return Ok(());
        };

        let hours = self.tracker.end_session(&name)?;
        self.status = Some(format!("Recorded {hours:.2}h against '{name}'"));
        Ok(())
    }

    /// Drop the selected module's most recent session.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the change fails.
    pub fn undo_selected(&mut self) -> Result<(), SwotError> {
        self.pending_quit = false;
        let Some(name) = self.selected_module().map(ToString::to_string) else {
            return Ok(());
        };

        self.status = Some(match self.tracker.remove_last_session(&name)? {
            Some(hours) => format!("Removed last session ({hours}h) from '{name}'"),
            None => format!("Nothing to remove for '{name}'"),
        });
        Ok(())
    }

    /// Remove the selected module entirely.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the change fails.
    pub fn remove_selected(&mut self) -> Result<(), SwotError> {
        self.pending_quit = false;
        let Some(name) = self.selected_module().map(ToString::to_string) else {
            return Ok(());
        };

        self.tracker.remove_module(&name)?;
        self.refresh_modules();
        self.status = Some(format!("Removed module '{name}'"));
        Ok(())
    }

    /// Handle a quit request.
    ///
    /// Returns true when the app should actually quit. While a session is
    /// live the first press only warns - quitting discards unsaved time.
    pub fn request_quit(&mut self) -> bool {
        if self.tracker.timer_state() == TimerState::Idle || self.pending_quit {
            return true;
        }
        self.pending_quit = true;
        self.status =
            Some("Session in progress - q again to quit and discard it, e to end".to_string());
        false
    }

    /// Cancel a pending quit.
    pub fn cancel_pending(&mut self) {
        self.pending_quit = false;
    }

    /// Live elapsed time of the current session, formatted.
    pub fn timer_text(&self) -> String {
        format_duration_hms(self.tracker.elapsed())
    }

    /// The session timer's current state.
    pub fn timer_state(&self) -> TimerState {
        self.tracker.timer_state()
    }

    /// Session count and total seconds for a module row.
    pub fn module_row(&self, name: &str) -> (usize, i64) {
        let sessions = self.tracker.sessions(name).unwrap_or(&[]);
        (sessions.len(), total_seconds(sessions))
    }
}
