//! Injectable clock and wait capabilities
//!
//! The reporters never read the wall clock or sleep directly; they go
//! through these traits so tests can freeze time and skip the simulated
//! backup delay.

use chrono::{DateTime, Utc};
use std::time::Duration;

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Return the current instant
    fn now(&self) -> DateTime<Utc>;
}

/// Clock backed by the real system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock that always returns the same instant
///
/// Used in tests to assert exact timestamp values.
#[derive(Debug, Clone, Copy)]
pub struct FrozenClock {
    instant: DateTime<Utc>,
}

impl FrozenClock {
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

impl Clock for FrozenClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant
    }
}

/// Capability for blocking the calling thread
#[cfg_attr(test, mockall::automock)]
pub trait Waiter: Send + Sync {
    /// Block for the given duration
    fn wait(&self, duration: Duration);
}

/// Waiter that sleeps on the current thread
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadWaiter;

impl Waiter for ThreadWaiter {
    fn wait(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// Waiter that returns immediately
///
/// Used in tests to run the backup reporter without real delay.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoWait;

impl Waiter for NoWait {
    fn wait(&self, _duration: Duration) {}
}
