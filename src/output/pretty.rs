//! Pretty terminal output formatting.

use colored::Colorize;

use crate::core::duration::format_hms;

/// Format one module's total as a display line.
#[must_use]
pub fn format_module_total(name: &str, seconds: i64) -> String {
    format!(
        "{} {}",
        format!("{name}:").bold(),
        format_hms(seconds).cyan()
    )
}

/// Format the grand total across all modules.
#[must_use]
pub fn format_overall_total(module_count: usize, seconds: i64) -> String {
    format!(
        "{} {}  {}",
        "Total study time:".bold(),
        format_hms(seconds).cyan(),
        format!("({module_count} modules)").dimmed()
    )
}

/// Format the "no data" line for a module without an entry.
#[must_use]
pub fn format_no_data(name: &str) -> String {
    format!("No data for module: {name}")
}

/// Format the module list with session counts and totals.
///
/// `rows` is (name, session count, total seconds).
#[must_use]
pub fn format_module_list(rows: &[(String, usize, i64)]) -> String {
    if rows.is_empty() {
        return "No modules yet.\n  Add one with: swot module add <NAME>".to_string();
    }

    let width = rows.iter().map(|(name, _, _)| name.len()).max().unwrap_or(0);

    let mut output = format!("Modules ({})\n", rows.len());
    output.push_str(&"─".repeat(44));
    output.push('\n');

    for (name, sessions, seconds) in rows {
        // Pad before coloring: escape codes would throw the columns off.
        let name = format!("{name:<width$}");
        let count = format!(
            "{:<11}",
            format!("{sessions} session{}", if *sessions == 1 { "" } else { "s" })
        );
        output.push_str(&format!(
            "{}  {}  {}\n",
            name.bold(),
            count.dimmed(),
            format_hms(*seconds).cyan(),
        ));
    }

    output
}
