//! Injectable time source for token expiry and cache TTL decisions.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, TimeZone, Utc};

/// Source of "now" for every expiry and TTL computation in the crate.
///
/// Services never call `Utc::now()` directly on validation or TTL paths, so
/// tests can drive time deterministically with [`ManualClock`].
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Current instant as UTC epoch seconds
    fn now_timestamp(&self) -> i64 {
        self.now().timestamp()
    }
}

/// Production clock backed by the system time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Manually driven clock with epoch-second precision, for tests
#[derive(Debug)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    /// Create a clock frozen at the given epoch second
    pub fn at(epoch_seconds: i64) -> Self {
        Self {
            now: AtomicI64::new(epoch_seconds),
        }
    }

    /// Create a clock frozen at the current system time
    pub fn at_system_now() -> Self {
        Self::at(Utc::now().timestamp())
    }

    /// Move the clock forward by the given number of seconds
    pub fn advance(&self, seconds: i64) {
        self.now.fetch_add(seconds, Ordering::SeqCst);
    }

    /// Set the clock to an absolute epoch second
    pub fn set(&self, epoch_seconds: i64) {
        self.now.store(epoch_seconds, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let seconds = self.now.load(Ordering::SeqCst);
        Utc.timestamp_opt(seconds, 0).single().unwrap_or_default()
    }
}
