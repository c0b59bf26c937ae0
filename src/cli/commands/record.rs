//! Recording and undoing study time from the command line.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::SwotError;
use crate::output::to_json;
use crate::study::StudyTracker;

/// Execute the log command: credit past study time to a module.
///
/// Hours arrive as raw text so a bad value surfaces as the same
/// invalid-input error the library reports for negative numbers.
///
/// # Errors
///
/// Returns `InvalidInput` for non-numeric or negative hours and
/// `UnknownModule` for a module that has not been added.
pub fn record(
    tracker: &mut StudyTracker,
    module: &str,
    hours: &str,
    format: OutputFormat,
) -> Result<String, SwotError> {
    let parsed: f64 = hours.trim().parse().map_err(|_| {
        SwotError::InvalidInput(format!("invalid hours value '{hours}', enter a number"))
    })?;
    tracker.add_past_time(module, parsed)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "module": module, "hours": parsed })),
        OutputFormat::Pretty => Ok(format!(
            "{} Logged {parsed}h of study time for '{module}'.",
            "✓".green()
        )),
    }
}

/// Execute the undo command: drop a module's most recent session.
///
/// # Errors
///
/// Returns an error only if persisting the change fails; a module with
/// nothing to remove is a no-op.
pub fn undo(
    tracker: &mut StudyTracker,
    module: &str,
    format: OutputFormat,
) -> Result<String, SwotError> {
    let removed = tracker.remove_last_session(module)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "module": module, "removedHours": removed })),
        OutputFormat::Pretty => Ok(match removed {
            Some(hours) => format!(
                "{} Removed last session ({hours}h) from '{module}'.",
                "✓".green()
            ),
            None => format!("Nothing to remove for '{module}'."),
        }),
    }
}
