//! Command implementations for swot.
//!
//! Each command takes the tracker and an output format and returns the
//! string to print, or a typed error for the binary to render.

mod completions;
mod module;
mod record;
mod show;

pub use completions::completions;
pub use module::module;
pub use record::{record, undo};
pub use show::show;
