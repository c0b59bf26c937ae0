//! Module management commands.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{ModuleCommands, OutputFormat};
use crate::core::duration::total_seconds;
use crate::error::SwotError;
use crate::output::{format_module_list, to_json};
use crate::study::StudyTracker;

/// Execute module subcommands.
///
/// # Errors
///
/// Returns an error if the underlying tracker operation fails.
pub fn module(
    tracker: &mut StudyTracker,
    cmd: ModuleCommands,
    format: OutputFormat,
) -> Result<String, SwotError> {
    match cmd {
        ModuleCommands::Add { name } => add(tracker, &name, format),
        ModuleCommands::Remove { name, exact } => remove(tracker, &name, exact, format),
        ModuleCommands::List => list(tracker, format),
    }
}

/// Add a module.
fn add(tracker: &mut StudyTracker, name: &str, format: OutputFormat) -> Result<String, SwotError> {
    let existed = tracker.contains(name);
    tracker.add_module(name)?;

    match format {
        OutputFormat::Json => to_json(&json!({ "module": name, "added": !existed })),
        OutputFormat::Pretty => Ok(if existed {
            format!("Module '{name}' already exists.")
        } else {
            format!("{} Module '{name}' added.", "✓".green())
        }),
    }
}

/// Remove a module, case-insensitively by default.
fn remove(
    tracker: &mut StudyTracker,
    name: &str,
    exact: bool,
    format: OutputFormat,
) -> Result<String, SwotError> {
    if exact {
        let removed = tracker.remove_module(name)?;
        return match format {
            OutputFormat::Json => to_json(&json!({ "module": name, "removed": removed })),
            OutputFormat::Pretty => Ok(if removed {
                format!("{} Module '{name}' removed.", "✓".green())
            } else {
                format!("Module '{name}' not found; nothing removed.")
            }),
        };
    }

    let canonical = tracker.remove_module_ignore_case(name)?;
    match format {
        OutputFormat::Json => to_json(&json!({ "module": canonical, "removed": true })),
        OutputFormat::Pretty => Ok(format!("{} Module '{canonical}' removed.", "✓".green())),
    }
}

/// List modules with their totals.
fn list(tracker: &StudyTracker, format: OutputFormat) -> Result<String, SwotError> {
    let rows: Vec<(String, usize, i64)> = tracker
        .modules()
        .iter()
        .map(|name| {
            let sessions = tracker.sessions(name).unwrap_or(&[]);
            ((*name).to_string(), sessions.len(), total_seconds(sessions))
        })
        .collect();

    match format {
        OutputFormat::Json => {
            let items: Vec<_> = rows
                .iter()
                .map(|(name, sessions, seconds)| {
                    json!({
                        "module": name,
                        "sessions": sessions,
                        "totalSeconds": seconds,
                    })
                })
                .collect();
            to_json(&json!({ "count": rows.len(), "items": items }))
        }
        OutputFormat::Pretty => Ok(format_module_list(&rows)),
    }
}
