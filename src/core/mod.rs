//! Shared primitives: the time source and duration formatting.

pub mod clock;
pub mod duration;

pub use clock::{Clock, SystemClock};
pub use duration::{format_duration_hms, format_hms, hours_to_seconds, total_seconds};
