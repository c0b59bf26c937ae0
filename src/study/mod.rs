//! Study-time accounting.
//!
//! The heart of swot:
//! - A persisted per-module log of recorded session hours
//! - The start/pause/end session timer state machine
//! - The tracker that composes both and owns all mutation

pub mod store;
pub mod timer;
pub mod tracker;

pub use store::{ModuleLog, ModuleStore};
pub use timer::{SessionTimer, TimerState};
pub use tracker::StudyTracker;
