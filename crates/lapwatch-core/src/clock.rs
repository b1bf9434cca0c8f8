//! Instant sources for the stopwatch
//!
//! [`MonotonicClock`] reads `std::time::Instant`. [`ManualClock`] only moves
//! when told to, which keeps timing tests deterministic.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// A source of ordered instants
///
/// Successive calls to [`Clock::now`] must never go backwards.
pub trait Clock {
    /// Read the current instant
    fn now(&self) -> Instant;
}

/// The system monotonic clock
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

impl Clock for MonotonicClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that advances only through [`ManualClock::advance`]
///
/// Clones share the same offset, so a test can hand one clone to a stopwatch
/// and keep another to move time forward.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl ManualClock {
    /// Create a manual clock anchored at the current instant
    pub fn new() -> Self {
        Self { origin: Instant::now(), offset: Rc::new(Cell::new(Duration::ZERO)) }
    }

    /// Move the clock forward
    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    /// Total time this clock has been advanced
    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::new();
        let first = clock.now();
        assert_eq!(clock.now(), first);

        clock.advance(Duration::from_millis(5));
        assert_eq!(clock.now() - first, Duration::from_millis(5));
        assert_eq!(clock.elapsed(), Duration::from_millis(5));
    }

    #[test]
    fn test_manual_clock_clones_share_offset() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        let before = clock.now();

        handle.advance(Duration::from_micros(250));

        assert_eq!(clock.now() - before, Duration::from_micros(250));
    }

    #[test]
    fn test_monotonic_clock_never_goes_backwards() {
        let clock = MonotonicClock;
        let first = clock.now();
        let second = clock.now();
        assert!(second >= first);
    }
}
