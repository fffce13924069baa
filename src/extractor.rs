use chrono::{DateTime, Utc};

use crate::config::BitLayout;
use crate::generator::time::nanos_to_datetime;

/// ID component extractor
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct IdExtractor {
    layout: BitLayout,
}

impl IdExtractor {
    /// Create a new extractor for the given layout
    pub fn new(layout: BitLayout) -> Self {
        Self { layout }
    }

    /// Extract the timestamp field (in timestamp units) from an ID
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        (id >> self.layout.timestamp_shift()) & self.layout.timestamp_mask()
    }

    /// Extract the worker ID from an ID
    #[inline(always)]
    pub fn worker_id(&self, id: u64) -> u64 {
        (id >> self.layout.worker_shift()) & self.layout.max_worker_id()
    }

    /// Extract the sequence from an ID
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u64 {
        id & self.layout.max_sequence()
    }

    /// Decompose an ID into its components: timestamp, worker ID, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u64, u64) {
        (self.timestamp(id), self.worker_id(id), self.sequence(id))
    }

    /// Truncated nanosecond clock reading the timestamp field stands for
    #[inline]
    pub fn clock_nanos(&self, id: u64) -> u64 {
        self.timestamp(id) << self.layout.timestamp_shift()
    }

    /// UTC time at which the ID's timestamp unit began
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        nanos_to_datetime(self.clock_nanos(id))
    }
}
