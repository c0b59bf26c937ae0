//! Output formatting for swot.
//!
//! Pretty (colored, human-readable) and JSON (machine-readable) renderers
//! for command results.

pub mod json;
pub mod pretty;

pub use json::{module_total_json, overall_total_json, to_json};
pub use pretty::{format_module_list, format_module_total, format_no_data, format_overall_total};
