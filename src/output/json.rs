//! JSON output formatting.
//!
//! Machine-readable envelopes for scripting, mirroring what the pretty
//! formatter shows.

use serde::Serialize;
use serde_json::json;

use crate::core::duration::format_hms;
use crate::error::SwotError;

/// Generic JSON formatter for any serializable type.
///
/// # Errors
///
/// Returns `SwotError::Json` if serialization fails.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, SwotError> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Shape one module's total.
///
/// # Errors
///
/// Returns `SwotError::Json` if serialization fails.
pub fn module_total_json(name: &str, sessions: usize, seconds: i64) -> Result<String, SwotError> {
    let output = json!({
        "module": name,
        "sessions": sessions,
        "totalSeconds": seconds,
        "formatted": format_hms(seconds),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Shape the grand total across all modules.
///
/// # Errors
///
/// Returns `SwotError::Json` if serialization fails.
pub fn overall_total_json(modules: usize, seconds: i64) -> Result<String, SwotError> {
    let output = json!({
        "modules": modules,
        "totalSeconds": seconds,
        "formatted": format_hms(seconds),
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
