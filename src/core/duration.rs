//! Duration conversion and display formatting.
//!
//! Study time is stored as fractional hours; everything user-facing renders
//! as zero-padded `HH:MM:SS`-style fields (`02H:30M:00S`).

use chrono::Duration;

/// Convert fractional hours to whole seconds.
///
/// Rounds to the nearest second and clamps below at zero. Rounding (rather
/// than truncating) keeps sums like `150/3600` hours from rendering one
/// second short.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn hours_to_seconds(hours: f64) -> i64 {
    if !hours.is_finite() || hours <= 0.0 {
        return 0;
    }
    (hours * 3600.0).round() as i64
}

/// Total whole seconds for a slice of per-session hours.
#[must_use]
pub fn total_seconds(sessions: &[f64]) -> i64 {
    hours_to_seconds(sessions.iter().sum())
}

/// Format whole seconds as `HH'H':MM'M':SS'S'`.
///
/// Fields are zero-padded to two digits; hours widen past two digits
/// instead of wrapping.
#[must_use]
pub fn format_hms(total_seconds: i64) -> String {
    let total = total_seconds.max(0);
    let hours = total / 3600;
    let minutes = (total % 3600) / 60;
    let seconds = total % 60;
    format!("{hours:02}H:{minutes:02}M:{seconds:02}S")
}

/// Format a duration as `HH'H':MM'M':SS'S'`.
#[must_use]
pub fn format_duration_hms(d: Duration) -> String {
    format_hms(d.num_seconds())
}
