//! The study tracker.
//!
//! Composes the module store and the session timer: module management,
//! session lifecycle, and total-time reporting. The tracker is the
//! exclusive owner of both - the interface layer goes through these
//! methods only.

use chrono::Duration;

use crate::core::clock::{Clock, SystemClock};
use crate::core::duration::{format_hms, hours_to_seconds, total_seconds};
use crate::error::SwotError;
use crate::study::store::{ModuleLog, ModuleStore};
use crate::study::timer::{SessionTimer, TimerState};

/// Tracks study time per module and runs the session timer.
///
/// Every mutating operation persists the whole log before returning. When
/// a save fails the in-memory log keeps the mutation and stays
/// authoritative for the process; the error is surfaced, not rolled back.
pub struct StudyTracker<C: Clock = SystemClock> {
    store: ModuleStore,
    modules: ModuleLog,
    timer: SessionTimer,
    clock: C,
}

impl StudyTracker<SystemClock> {
    /// Open a tracker backed by the given store, on wall-clock time.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file exists but cannot be loaded.
    pub fn open(store: ModuleStore) -> Result<Self, SwotError> {
        Self::with_clock(store, SystemClock)
    }
}

impl<C: Clock> StudyTracker<C> {
    /// Open a tracker with an explicit clock.
    ///
    /// # Errors
    ///
    /// Returns an error if the data file exists but cannot be loaded.
    pub fn with_clock(store: ModuleStore, clock: C) -> Result<Self, SwotError> {
        let modules = store.load()?;
        Ok(Self {
            store,
            modules,
            timer: SessionTimer::new(),
            clock,
        })
    }

    // ---- module management ----

    /// Register a module with no recorded time.
    ///
    /// Adding a name that already exists is a no-op; recorded time is
    /// never clobbered.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` for an empty name, or a persistence error.
    pub fn add_module(&mut self, name: &str) -> Result<(), SwotError> {
        if name.trim().is_empty() {
            return Err(SwotError::InvalidInput(
                "module name must not be empty".to_string(),
            ));
        }
        if self.modules.contains_key(name) {
            return Ok(());
        }
        self.modules.insert(name.to_string(), Vec::new());
        self.store.save(&self.modules)
    }

    /// Remove a module by exact name, with all its recorded time.
    ///
    /// Returns whether anything was removed; a missing module is a no-op.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the updated log cannot be saved.
    pub fn remove_module(&mut self, name: &str) -> Result<bool, SwotError> {
        if self.modules.remove(name).is_none() {
            return Ok(false);
        }
        self.store.save(&self.modules)?;
        Ok(true)
    }

    /// Remove the module whose name matches ignoring case.
    ///
    /// Returns the canonical name that was removed. With case-variant
    /// duplicates, the first match in sorted key order wins.
    ///
    /// # Errors
    ///
    /// Returns `ModuleNotFound` when nothing matches, or a persistence
    /// error.
    pub fn remove_module_ignore_case(&mut self, name: &str) -> Result<String, SwotError> {
        let target = name.to_lowercase();
        let canonical = self
            .modules
            .keys()
            .find(|key| key.to_lowercase() == target)
            .cloned()
            .ok_or_else(|| SwotError::ModuleNotFound(name.to_string()))?;

        self.modules.remove(&canonical);
        self.store.save(&self.modules)?;
        Ok(canonical)
    }

    /// Drop the most recently recorded session of a module.
    ///
    /// Returns the removed hours, or `None` when the module is missing or
    /// has no sessions - both are no-ops, not errors.
    ///
    /// # Errors
    ///
    /// Returns a persistence error if the updated log cannot be saved.
    pub fn remove_last_session(&mut self, name: &str) -> Result<Option<f64>, SwotError> {
        let Some(hours) = self.modules.get_mut(name).and_then(Vec::pop) else {
            return Ok(None);
        };
        self.store.save(&self.modules)?;
        Ok(Some(hours))
    }

    /// Record study time done away from the timer.
    ///
    /// # Errors
    ///
    /// Returns `UnknownModule` if `name` has not been added, or
    /// `InvalidInput` unless `hours` is a finite non-negative number.
    /// Nothing is mutated on failure.
    pub fn add_past_time(&mut self, name: &str, hours: f64) -> Result<(), SwotError> {
        let Some(sessions) = self.modules.get_mut(name) else {
            return Err(SwotError::UnknownModule(name.to_string()));
        };
        if !hours.is_finite() || hours < 0.0 {
            return Err(SwotError::InvalidInput(format!(
                "hours must be a non-negative number, got {hours}"
            )));
        }
        sessions.push(hours);
        self.store.save(&self.modules)
    }

    // ---- session lifecycle ----

    /// Start the session timer, or pause it if it is running.
    ///
    /// The session is module-agnostic until it ends; no module needs to
    /// exist yet and nothing is persisted here.
    pub fn start_or_pause(&mut self) -> TimerState {
        let now = self.clock.now();
        self.timer.toggle(now)
    }

    /// End the current session and record it against `name`.
    ///
    /// The timer resets whether or not time had accrued; ending while idle
    /// records an explicit `0.0`-hour session. Returns the hours recorded.
    ///
    /// # Errors
    ///
    /// Returns `UnknownModule` if `name` has not been added - checked
    /// before the timer is touched, so a failed end leaves the session
    /// intact.
    #[allow(clippy::cast_precision_loss)]
    pub fn end_session(&mut self, name: &str) -> Result<f64, SwotError> {
        if !self.modules.contains_key(name) {
            return Err(SwotError::UnknownModule(name.to_string()));
        }

        let now = self.clock.now();
        let total = self.timer.finalize(now);
        let hours = total.num_milliseconds() as f64 / 3_600_000.0;

        if let Some(sessions) = self.modules.get_mut(name) {
            sessions.push(hours);
        }
        self.store.save(&self.modules)?;
        Ok(hours)
    }

    /// Live elapsed time of the current session, for periodic redisplay.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.timer.elapsed(self.clock.now())
    }

    /// The session timer's current state.
    #[must_use]
    pub const fn timer_state(&self) -> TimerState {
        self.timer.state()
    }

    // ---- reporting ----

    /// Module names in sorted order.
    #[must_use]
    pub fn modules(&self) -> Vec<&str> {
        self.modules.keys().map(String::as_str).collect()
    }

    /// Whether a module exists.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Recorded sessions of a module, oldest first.
    #[must_use]
    pub fn sessions(&self, name: &str) -> Option<&[f64]> {
        self.modules.get(name).map(Vec::as_slice)
    }

    /// Total recorded whole seconds of a module, `None` if it is missing.
    #[must_use]
    pub fn module_seconds(&self, name: &str) -> Option<i64> {
        self.modules.get(name).map(|sessions| total_seconds(sessions))
    }

    /// Total recorded whole seconds across every module.
    #[must_use]
    pub fn overall_seconds(&self) -> i64 {
        hours_to_seconds(self.modules.values().flatten().sum())
    }

    /// Human-readable total for one module, or for everything when `None`.
    ///
    /// An unknown module yields a "no data" line - informational, not an
    /// error.
    #[must_use]
    pub fn summary(&self, module: Option<&str>) -> String {
        match module {
            Some(name) => self.module_seconds(name).map_or_else(
                || format!("No data for module: {name}"),
                |seconds| format!("Module: {name}, total study time: {}", format_hms(seconds)),
            ),
            None => format!(
                "Total study time across all modules: {}",
                format_hms(self.overall_seconds())
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use mockall::Sequence;
    use tempfile::TempDir;

    use crate::core::clock::MockClock;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 15, 9, 0, 0).unwrap()
    }

    fn tracker_in(dir: &TempDir) -> StudyTracker {
        let store = ModuleStore::new(dir.path().join("study.json"));
        StudyTracker::open(store).unwrap()
    }

    fn tracker_with_clock(dir: &TempDir, clock: MockClock) -> StudyTracker<MockClock> {
        let store = ModuleStore::new(dir.path().join("study.json"));
        StudyTracker::with_clock(store, clock).unwrap()
    }

    /// A clock that yields the given instants in order.
    fn scripted_clock(instants: &[DateTime<Utc>]) -> MockClock {
        let mut clock = MockClock::new();
        let mut seq = Sequence::new();
        for instant in instants {
            clock
                .expect_now()
                .times(1)
                .in_sequence(&mut seq)
                .return_const(*instant);
        }
        clock
    }

    #[test]
    fn test_add_module_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        tracker.add_module("algebra").unwrap();
        tracker.add_past_time("algebra", 1.0).unwrap();
        tracker.add_module("algebra").unwrap();

        assert_eq!(tracker.sessions("algebra"), Some(&[1.0][..]));
    }

    #[test]
    fn test_add_module_rejects_empty_name() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        let err = tracker.add_module("   ").unwrap_err();
        assert!(matches!(err, SwotError::InvalidInput(_)));
    }

    #[test]
    fn test_key_set_follows_adds_and_removes() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        tracker.add_module("Algebra").unwrap();
        tracker.add_module("History").unwrap();
        tracker.add_module("Logic").unwrap();
        assert!(tracker.remove_module("History").unwrap());
        tracker.remove_module_ignore_case("ALGEBRA").unwrap();

        assert_eq!(tracker.modules(), vec!["Logic"]);
    }

    #[test]
    fn test_remove_module_missing_is_noop() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        assert!(!tracker.remove_module("nope").unwrap());
    }

    #[test]
    fn test_remove_ignore_case_reports_canonical_name() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);
        tracker.add_module("Set Theory").unwrap();

        let removed = tracker.remove_module_ignore_case("set theory").unwrap();
        assert_eq!(removed, "Set Theory");
        assert!(!tracker.contains("Set Theory"));
    }

    #[test]
    fn test_remove_ignore_case_miss_is_an_error() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);

        let err = tracker.remove_module_ignore_case("nope").unwrap_err();
        assert!(matches!(err, SwotError::ModuleNotFound(_)));
    }

    #[test]
    fn test_remove_last_session_drains_then_noops() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);
        tracker.add_module("algebra").unwrap();
        tracker.add_past_time("algebra", 0.5).unwrap();

        assert_eq!(tracker.remove_last_session("algebra").unwrap(), Some(0.5));
        assert_eq!(tracker.sessions("algebra"), Some(&[][..]));
        assert_eq!(tracker.remove_last_session("algebra").unwrap(), None);
        assert_eq!(tracker.remove_last_session("missing").unwrap(), None);
    }

    #[test]
    fn test_remove_last_session_pops_newest_first() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);
        tracker.add_module("algebra").unwrap();
        tracker.add_past_time("algebra", 1.0).unwrap();
        tracker.add_past_time("algebra", 2.0).unwrap();

        assert_eq!(tracker.remove_last_session("algebra").unwrap(), Some(2.0));
        assert_eq!(tracker.sessions("algebra"), Some(&[1.0][..]));
    }

    #[test]
    fn test_add_past_time_unknown_module_leaves_log_untouched() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);
        tracker.add_module("algebra").unwrap();

        let err = tracker.add_past_time("nope", 1.0).unwrap_err();
        assert!(matches!(err, SwotError::UnknownModule(_)));
        assert_eq!(tracker.modules(), vec!["algebra"]);
        assert_eq!(tracker.sessions("algebra"), Some(&[][..]));
    }

    #[test]
    fn test_add_past_time_rejects_negative_and_non_finite() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);
        tracker.add_module("algebra").unwrap();

        for bad in [-0.5, f64::NAN, f64::INFINITY] {
            let err = tracker.add_past_time("algebra", bad).unwrap_err();
            assert!(matches!(err, SwotError::InvalidInput(_)));
        }
        assert_eq!(tracker.sessions("algebra"), Some(&[][..]));
    }

    #[test]
    fn test_paused_and_resumed_session_records_the_sum() {
        // Start at T0, pause at T0+90s, resume at T0+200s, end at T0+260s:
        // 90s + 60s running = 150s recorded.
        let instants = [
            t0(),
            t0() + Duration::seconds(90),
            t0() + Duration::seconds(200),
            t0() + Duration::seconds(260),
        ];
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_with_clock(&dir, scripted_clock(&instants));
        tracker.add_module("algebra").unwrap();

        assert_eq!(tracker.start_or_pause(), TimerState::Running);
        assert_eq!(tracker.start_or_pause(), TimerState::Paused);
        assert_eq!(tracker.start_or_pause(), TimerState::Running);
        let hours = tracker.end_session("algebra").unwrap();

        assert!((hours - 150.0 / 3600.0).abs() < 1e-9);
        assert_eq!(
            tracker.summary(Some("algebra")),
            "Module: algebra, total study time: 00H:02M:30S"
        );
    }

    #[test]
    fn test_end_without_elapsed_time_records_zero() {
        // end -> toggle -> end with a frozen clock: two entries, both zero.
        let mut clock = MockClock::new();
        clock.expect_now().return_const(t0());
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_with_clock(&dir, clock);
        tracker.add_module("algebra").unwrap();

        tracker.end_session("algebra").unwrap();
        tracker.start_or_pause();
        tracker.start_or_pause();
        tracker.end_session("algebra").unwrap();

        assert_eq!(tracker.sessions("algebra"), Some(&[0.0, 0.0][..]));
    }

    #[test]
    fn test_end_session_unknown_module_keeps_timer_intact() {
        let mut clock = MockClock::new();
        clock.expect_now().return_const(t0());
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_with_clock(&dir, clock);

        tracker.start_or_pause();
        let err = tracker.end_session("nope").unwrap_err();

        assert!(matches!(err, SwotError::UnknownModule(_)));
        assert_eq!(tracker.timer_state(), TimerState::Running);
    }

    #[test]
    fn test_summary_for_module_with_sessions() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);
        tracker.add_module("algebra").unwrap();
        tracker.add_past_time("algebra", 1.0).unwrap();
        tracker.add_past_time("algebra", 1.5).unwrap();

        assert_eq!(
            tracker.summary(Some("algebra")),
            "Module: algebra, total study time: 02H:30M:00S"
        );
    }

    #[test]
    fn test_summary_across_all_modules() {
        let dir = TempDir::new().unwrap();
        let mut tracker = tracker_in(&dir);
        tracker.add_module("A").unwrap();
        tracker.add_module("B").unwrap();
        tracker.add_past_time("A", 1.0).unwrap();
        tracker.add_past_time("B", 0.5).unwrap();

        assert_eq!(
            tracker.summary(None),
            "Total study time across all modules: 01H:30M:00S"
        );
    }

    #[test]
    fn test_summary_for_missing_module_is_informational() {
        let dir = TempDir::new().unwrap();
        let tracker = tracker_in(&dir);

        assert_eq!(tracker.summary(Some("nope")), "No data for module: nope");
    }

    #[test]
    fn test_mutations_survive_reopening() {
        let dir = TempDir::new().unwrap();
        {
            let mut tracker = tracker_in(&dir);
            tracker.add_module("algebra").unwrap();
            tracker.add_past_time("algebra", 2.0).unwrap();
        }

        let reopened = tracker_in(&dir);
        assert_eq!(reopened.sessions("algebra"), Some(&[2.0][..]));
        // The in-progress timer is process state; a fresh tracker is idle.
        assert_eq!(reopened.timer_state(), TimerState::Idle);
    }
}
