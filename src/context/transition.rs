//! Transition timing: the clock seam and progress math.
//!
//! A context switch animates over a fixed two-second window. Progress is
//! derived from timestamps rather than accumulated per frame, so a stalled
//! UI catches up instead of drifting.

use chrono::Utc;
use std::cell::Cell;
use std::rc::Rc;

/// Length of a context transition in milliseconds.
pub const TRANSITION_DURATION_MS: u64 = 2000;

/// Source of the current time in unix milliseconds.
///
/// The context manager reads time only through this trait, which keeps
/// transition behavior testable without sleeping.
pub trait Clock {
    /// Current unix time in milliseconds.
    fn now_ms(&self) -> i64;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// A clock that only moves when told to. Handles are shared: cloning one
/// and advancing it is visible through every other clone.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    /// Creates a clock frozen at the given unix millisecond timestamp.
    #[must_use]
    pub fn at(now_ms: i64) -> Self {
        Self {
            now: Rc::new(Cell::new(now_ms)),
        }
    }

    /// Jumps to an absolute time. Going backwards is allowed; progress math
    /// clamps negative elapsed time to zero.
    pub fn set(&self, now_ms: i64) {
        self.now.set(now_ms);
    }

    /// Moves the clock forward (or backward, with a negative delta).
    pub fn advance(&self, delta_ms: i64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

/// Computes transition completion for a transition started at
/// `started_at_ms`, observed at `now_ms`, lasting `duration_ms`.
///
/// Elapsed time before the start (clock skew, a start timestamp from the
/// future) counts as zero. A zero duration is already complete.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn transition_progress(started_at_ms: i64, now_ms: i64, duration_ms: u64) -> f64 {
    if duration_ms == 0 {
        return 1.0;
    }
    let elapsed = (now_ms - started_at_ms).max(0);
    (elapsed as f64 / duration_ms as f64).min(1.0)
}

/// A live transition. The owner holds at most one: assigning a new handle
/// supersedes the old animation, dropping it cancels outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionHandle {
    started_at_ms: i64,
    duration_ms: u64,
}

impl TransitionHandle {
    /// Starts a transition of the standard duration at the clock's now.
    #[must_use]
    pub fn begin(clock: &dyn Clock) -> Self {
        Self::with_duration(clock, TRANSITION_DURATION_MS)
    }

    /// Starts a transition of a custom duration at the clock's now.
    #[must_use]
    pub fn with_duration(clock: &dyn Clock, duration_ms: u64) -> Self {
        Self {
            started_at_ms: clock.now_ms(),
            duration_ms,
        }
    }

    /// Progress of this transition as observed at the clock's now.
    #[must_use]
    pub fn progress(&self, clock: &dyn Clock) -> f64 {
        transition_progress(self.started_at_ms, clock.now_ms(), self.duration_ms)
    }

    /// Whether the transition has run its full duration.
    #[must_use]
    pub fn is_complete(&self, clock: &dyn Clock) -> bool {
        self.progress(clock) >= 1.0
    }

    /// When this transition started, unix milliseconds.
    #[must_use]
    pub const fn started_at_ms(&self) -> i64 {
        self.started_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_at_known_offsets() {
        let start = 1_000_000;
        assert_eq!(transition_progress(start, start, 2000), 0.0);
        assert_eq!(transition_progress(start, start + 500, 2000), 0.25);
        assert_eq!(transition_progress(start, start + 1000, 2000), 0.5);
        assert_eq!(transition_progress(start, start + 2000, 2000), 1.0);
    }

    #[test]
    fn test_progress_saturates_at_one() {
        let start = 42;
        assert_eq!(transition_progress(start, start + 2500, 2000), 1.0);
        assert_eq!(transition_progress(start, start + 1_000_000, 2000), 1.0);
    }

    #[test]
    fn test_future_start_clamps_to_zero() {
        let start = 5000;
        assert_eq!(transition_progress(start, start - 1, 2000), 0.0);
        assert_eq!(transition_progress(start, 0, 2000), 0.0);
    }

    #[test]
    fn test_zero_duration_is_complete() {
        assert_eq!(transition_progress(100, 100, 0), 1.0);
        assert_eq!(transition_progress(100, 50, 0), 1.0);
    }

    #[test]
    fn test_progress_is_non_decreasing() {
        let start = 7_000;
        let mut last = 0.0;
        for offset in (0..3000).step_by(37) {
            let p = transition_progress(start, start + offset, 2000);
            assert!(p >= last, "progress regressed at offset {offset}");
            last = p;
        }
        assert_eq!(last, 1.0);
    }

    #[test]
    fn test_handle_tracks_clock() {
        let clock = ManualClock::at(10_000);
        let handle = TransitionHandle::begin(&clock);
        assert_eq!(handle.progress(&clock), 0.0);
        assert!(!handle.is_complete(&clock));

        clock.advance(1000);
        assert_eq!(handle.progress(&clock), 0.5);

        clock.advance(1500);
        assert_eq!(handle.progress(&clock), 1.0);
        assert!(handle.is_complete(&clock));
    }

    #[test]
    fn test_replacing_handle_restarts_progress() {
        let clock = ManualClock::at(0);
        let mut active = Some(TransitionHandle::begin(&clock));
        clock.advance(1500);
        assert_eq!(active.as_ref().map(|h| h.progress(&clock)), Some(0.75));

        // A new transition supersedes the old one
        active = Some(TransitionHandle::begin(&clock));
        assert_eq!(active.as_ref().map(|h| h.progress(&clock)), Some(0.0));
        assert_eq!(active.as_ref().map(TransitionHandle::started_at_ms), Some(1500));
    }

    #[test]
    fn test_manual_clock_handles_are_shared() {
        let clock = ManualClock::at(100);
        let other = clock.clone();
        other.advance(50);
        assert_eq!(clock.now_ms(), 150);
        other.set(10);
        assert_eq!(clock.now_ms(), 10);
    }
}
