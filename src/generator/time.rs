//! Time utilities for ID generation
//!
//! Provides a nanosecond wall clock and truncation to the timestamp precision

use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

/// Source of nanosecond clock readings
///
/// Lets tests drive the generator with a controlled clock.
pub trait TimeSource {
    /// Current time in nanoseconds since the Unix epoch
    fn now_nanos(&self) -> u64;
}

/// Wall clock backed by [`SystemTime`]
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl TimeSource for SystemClock {
    #[inline(always)]
    fn now_nanos(&self) -> u64 {
        unix_time_nanos()
    }
}

impl<T: TimeSource + ?Sized> TimeSource for Arc<T> {
    #[inline(always)]
    fn now_nanos(&self) -> u64 {
        (**self).now_nanos()
    }
}

/// Get current wall-clock time in nanoseconds since Unix epoch.
/// A clock set before the epoch reads as 0; one past the u64 nanosecond
/// horizon (year 2554) reads as `u64::MAX`.
#[inline(always)]
pub fn unix_time_nanos() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(duration_to_nanos)
        .unwrap_or(0)
}

/// Whole nanoseconds in `d`, saturating at `u64::MAX`
#[inline(always)]
pub(crate) fn duration_to_nanos(d: Duration) -> u64 {
    u64::try_from(d.as_nanos()).unwrap_or(u64::MAX)
}

/// Keep only the high bits of a clock reading, zeroing the low `shift` bits
#[inline(always)]
pub const fn truncate(nanos: u64, shift: u8) -> u64 {
    (nanos >> shift) << shift
}

/// Convert a nanosecond reading into a UTC date, if it is representable
pub fn nanos_to_datetime(nanos: u64) -> Option<DateTime<Utc>> {
    i64::try_from(nanos).ok().map(DateTime::from_timestamp_nanos)
}
