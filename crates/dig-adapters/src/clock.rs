//! Clock adapters.
//!
//! Migration filenames are prefixed with an epoch-millisecond timestamp;
//! these adapters back the `Clock` port so production code reads the wall
//! clock while tests pin exact values.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dig_core::application::ports::Clock;

/// Wall clock backed by `chrono`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl SystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl Clock for SystemClock {
    fn epoch_millis(&self) -> u64 {
        // timestamp_millis() is negative only before 1970.
        Utc::now().timestamp_millis().max(0) as u64
    }
}

/// Deterministic clock for tests: returns a fixed value, advancing by a
/// configurable step on every call so successive migrations get distinct,
/// ordered timestamps.
#[derive(Debug)]
pub struct FixedClock {
    now: AtomicU64,
    step: u64,
}

impl FixedClock {
    /// A clock frozen at `millis`.
    pub fn frozen(millis: u64) -> Self {
        Self {
            now: AtomicU64::new(millis),
            step: 0,
        }
    }

    /// A clock starting at `millis` that advances by `step` per reading.
    pub fn ticking(millis: u64, step: u64) -> Self {
        Self {
            now: AtomicU64::new(millis),
            step,
        }
    }
}

impl Clock for FixedClock {
    fn epoch_millis(&self) -> u64 {
        self.now.fetch_add(self.step, Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_clock_is_past_2020() {
        // 2020-01-01T00:00:00Z in epoch millis.
        assert!(SystemClock::new().epoch_millis() > 1_577_836_800_000);
    }

    #[test]
    fn frozen_clock_repeats() {
        let clock = FixedClock::frozen(1_700_000_000_000);
        assert_eq!(clock.epoch_millis(), 1_700_000_000_000);
        assert_eq!(clock.epoch_millis(), 1_700_000_000_000);
    }

    #[test]
    fn ticking_clock_advances() {
        let clock = FixedClock::ticking(100, 5);
        assert_eq!(clock.epoch_millis(), 100);
        assert_eq!(clock.epoch_millis(), 105);
        assert_eq!(clock.epoch_millis(), 110);
    }
}
