//! Time-related utilities with clock abstraction for testability.

use std::sync::atomic::{AtomicI64, Ordering};

use chrono::{DateTime, FixedOffset, Offset, TimeZone, Utc};

/// Moscow time (UTC+3), the timezone the roster's players live in
const MSK_OFFSET_SECS: i32 = 3 * 3600;

/// Clock trait for dependency injection and testing
pub trait Clock: Send + Sync {
    /// Get current Unix timestamp (milliseconds)
    fn now_millis(&self) -> i64;
}

/// System clock implementation (uses actual system time)
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Fixed clock implementation for testing (returns a fixed time)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    fixed_time: i64,
}

impl FixedClock {
    /// Create a new fixed clock with the given timestamp
    pub fn new(fixed_time_millis: i64) -> Self {
        Self {
            fixed_time: fixed_time_millis,
        }
    }
}

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.fixed_time
    }
}

/// Manually advanced clock for tests that need time to move between events
#[derive(Debug, Default)]
pub struct ManualClock {
    now: AtomicI64,
}

impl ManualClock {
    pub fn new(start_millis: i64) -> Self {
        Self {
            now: AtomicI64::new(start_millis),
        }
    }

    /// Move the clock forward by `millis`
    pub fn advance(&self, millis: i64) {
        self.now.fetch_add(millis, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_millis(&self) -> i64 {
        self.now.load(Ordering::SeqCst)
    }
}

fn msk_offset() -> FixedOffset {
    FixedOffset::east_opt(MSK_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

fn to_msk(timestamp_millis: i64) -> Option<DateTime<FixedOffset>> {
    msk_offset().timestamp_millis_opt(timestamp_millis).single()
}

/// Convert Unix timestamp (milliseconds) to MSK RFC 3339 format
///
/// Out-of-range timestamps fall back to the raw millisecond value.
pub fn timestamp_to_rfc3339(timestamp_millis: i64) -> String {
    to_msk(timestamp_millis)
        .map(|dt| dt.to_rfc3339())
        .unwrap_or_else(|| timestamp_millis.to_string())
}

/// Convert Unix timestamp (milliseconds) to a short `HH:MM` wall-clock time (MSK)
pub fn timestamp_to_clock_time(timestamp_millis: i64) -> String {
    to_msk(timestamp_millis)
        .map(|dt| dt.format("%H:%M").to_string())
        .unwrap_or_else(|| "--:--".to_string())
}
