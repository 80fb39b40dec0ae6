//! Time source abstraction.
//!
//! Production code injects [`SystemClock`]. Tests inject [`ManualClock`] so
//! creation timestamps and session expiry can be asserted exactly.

use std::fmt;
use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, Duration, Utc};

use crate::types::Timestamp;

pub trait Clock: Send + Sync + fmt::Debug {
    /// Current wall-clock time (UTC).
    fn now(&self) -> Timestamp;
}

/// Wall clock backed by [`Utc::now`].
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Utc::now()
    }
}

/// A clock that only moves when told to. Millisecond resolution.
#[derive(Debug)]
pub struct ManualClock {
    millis: AtomicI64,
}

impl ManualClock {
    pub fn new(start: Timestamp) -> Self {
        Self {
            millis: AtomicI64::new(start.timestamp_millis()),
        }
    }

    /// A clock pinned to `millis` since the Unix epoch.
    pub fn at_millis(millis: i64) -> Self {
        Self {
            millis: AtomicI64::new(millis),
        }
    }

    pub fn set(&self, to: Timestamp) {
        self.millis.store(to.timestamp_millis(), Ordering::SeqCst);
    }

    pub fn advance(&self, by: Duration) {
        self.millis
            .fetch_add(by.num_milliseconds(), Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        DateTime::from_timestamp_millis(self.millis.load(Ordering::SeqCst))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_only_moves_when_advanced() {
        let clock = ManualClock::at_millis(100);
        assert_eq!(clock.now().timestamp_millis(), 100);
        assert_eq!(clock.now(), clock.now());

        clock.advance(Duration::hours(6));
        assert_eq!(
            clock.now().timestamp_millis(),
            100 + 6 * 60 * 60 * 1000
        );
    }

    #[test]
    fn manual_clock_set_overrides() {
        let clock = ManualClock::at_millis(0);
        let target = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        clock.set(target);
        assert_eq!(clock.now(), target);
    }
}
