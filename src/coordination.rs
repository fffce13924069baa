//! Worker ID assignment
//!
//! Each generator needs a worker ID no other live generator holds. The
//! assignment happens once per process, before the generator is built, and
//! normally comes from a shared counter in an external store. This module
//! defines that seam and an in-process counter with the same semantics.

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, warn};

use crate::config::BitLayout;
use crate::error::CoordinationError;

/// Hands out worker IDs that are unique among live generators
pub trait WorkerIdSource {
    /// Reserve the next worker ID
    fn acquire(&self) -> Result<u64, CoordinationError>;
}

impl<F> WorkerIdSource for F
where
    F: Fn() -> Result<u64, CoordinationError>,
{
    fn acquire(&self) -> Result<u64, CoordinationError> {
        self()
    }
}

/// Increment-then-check counter
///
/// The first ID handed out is 1, as with an increment on an absent key in a
/// key-value store. Fails once the next value would exceed `limit`.
#[derive(Debug)]
pub struct CounterWorkerIdSource {
    last_issued: AtomicU64,
    limit: u64,
}

impl CounterWorkerIdSource {
    /// Counter issuing 1..=limit
    pub fn new(limit: u64) -> Self {
        Self::resume_from(0, limit)
    }

    /// Counter bounded by the largest worker ID `layout` can hold
    pub fn for_layout(layout: &BitLayout) -> Self {
        Self::new(layout.max_worker_id())
    }

    /// Counter continuing after `last_issued`
    pub fn resume_from(last_issued: u64, limit: u64) -> Self {
        Self {
            last_issued: AtomicU64::new(last_issued),
            limit,
        }
    }

    /// Largest ID handed out so far (0 when none)
    pub fn last_issued(&self) -> u64 {
        self.last_issued.load(Ordering::Acquire)
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }
}

impl WorkerIdSource for CounterWorkerIdSource {
    fn acquire(&self) -> Result<u64, CoordinationError> {
        let limit = self.limit;
        match self
            .last_issued
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |last| {
                last.checked_add(1).filter(|next| *next <= limit)
            }) {
            Ok(previous) => {
                let worker_id = previous + 1;
                debug!("coordination: acquired worker id {worker_id}");
                Ok(worker_id)
            }
            Err(last) => {
                warn!("coordination: worker ids exhausted at {last}, limit {limit}");
                Err(CoordinationError::Exhausted { limit })
            }
        }
    }
}
