//! Time source abstraction.

use chrono::{DateTime, Utc};

#[cfg(test)]
use mockall::automock;

/// Source of the current instant.
///
/// The tracker reads time through this trait so tests can drive the
/// session state machine over a scripted timeline instead of sleeping.
#[cfg_attr(test, automock)]
pub trait Clock {
    /// The current instant.
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
