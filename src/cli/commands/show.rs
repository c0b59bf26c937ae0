//! Showing accumulated study time.

use serde_json::json;

use crate::cli::args::OutputFormat;
use crate::error::SwotError;
use crate::output::{
    format_module_total, format_no_data, format_overall_total, module_total_json,
    overall_total_json, to_json,
};
use crate::study::StudyTracker;

/// Execute the show command.
///
/// With a module name, shows that module's total; a module without an
/// entry is reported as "no data", not an error. With no name, shows the
/// grand total across every module.
///
/// # Errors
///
/// Returns an error only if JSON serialization fails.
pub fn show(
    tracker: &StudyTracker,
    module: Option<&str>,
    format: OutputFormat,
) -> Result<String, SwotError> {
    match module {
        Some(name) => match tracker.module_seconds(name) {
            Some(seconds) => {
                let sessions = tracker.sessions(name).map_or(0, <[f64]>::len);
                match format {
                    OutputFormat::Json => module_total_json(name, sessions, seconds),
                    OutputFormat::Pretty => Ok(format_module_total(name, seconds)),
                }
            }
            None => match format {
                OutputFormat::Json => {
                    to_json(&json!({ "module": name, "totalSeconds": null }))
                }
                OutputFormat::Pretty => Ok(format_no_data(name)),
            },
        },
        None => {
            let seconds = tracker.overall_seconds();
            let modules = tracker.modules().len();
            match format {
                OutputFormat::Json => overall_total_json(modules, seconds),
                OutputFormat::Pretty => Ok(format_overall_total(modules, seconds)),
            }
        }
    }
}
