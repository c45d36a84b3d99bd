//! Trusted time source for deadline checks.

use std::cell::Cell;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::domain::Timestamp;

/// Supplies the current time.
///
/// The engine only compares readings against caller deadlines; it never
/// sleeps, polls, or schedules.
pub trait Clock {
    /// Returns the current time.
    fn now(&self) -> Timestamp;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Timestamp {
        (**self).now()
    }
}

/// Wall-clock time from the operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        // A clock set before 1970 reads as the epoch.
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0, |d| d.as_secs());
        Timestamp::from_secs(secs)
    }
}

/// A clock that only moves when told to.
///
/// ```
/// use pairswap::domain::Timestamp;
/// use pairswap::traits::{Clock, ManualClock};
///
/// let clock = ManualClock::new(Timestamp::from_secs(100));
/// clock.advance(5);
/// assert_eq!(clock.now(), Timestamp::from_secs(105));
/// ```
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Timestamp>,
}

impl ManualClock {
    /// Creates a clock reading `start`.
    #[must_use]
    pub fn new(start: Timestamp) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Sets the current reading.
    pub fn set(&self, now: Timestamp) {
        self.now.set(now);
    }

    /// Moves the clock forward by `secs`, saturating.
    pub fn advance(&self, secs: u64) {
        self.now.set(self.now.get().saturating_add_secs(secs));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Timestamp {
        self.now.get()
    }
}
