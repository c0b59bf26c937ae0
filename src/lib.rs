//! swot - a study-time tracker for the terminal.
//!
//! Tracks study time per named module: run live start/pause/end timer
//! sessions, log time studied elsewhere, and display accumulated totals.
//! Everything persists as a single JSON document under `~/.swot/`.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod study;
pub mod tui;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::SwotError;
pub use study::{ModuleStore, SessionTimer, StudyTracker, TimerState};
