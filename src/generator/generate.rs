//! ID generation logic
//!
//! `next_id` and `next_ids` run entirely under the generator lock

use super::state::GeneratorState;
use super::time::TimeSource;
use super::wait::wait_for_next;
use super::Generator;
use crate::error::GeneratorError;

/// Upper bound on the capacity reserved up front by `next_ids`
const MAX_PREALLOCATED_IDS: usize = 4096;

impl<T: TimeSource> Generator<T> {
    /// Generate a new ID
    ///
    /// Blocks (spinning, with the lock held) when the sequence for the
    /// current timestamp unit is used up.
    ///
    /// # Errors
    /// - [`GeneratorError::NotInitialized`] before a successful `init`
    /// - [`GeneratorError::ClockRollback`] when the clock reads earlier than
    ///   the last timestamp used
    pub fn next_id(&self) -> Result<u64, GeneratorError> {
        let mut state = self.state.lock();
        self.step(&mut state)
    }

    /// Generate `count` IDs in one critical section
    ///
    /// The IDs are strictly increasing. On the first error the IDs produced
    /// so far are discarded and the error is returned.
    pub fn next_ids(&self, count: usize) -> Result<Vec<u64>, GeneratorError> {
        let mut state = self.state.lock();
        let config = state.active.ok_or(GeneratorError::NotInitialized)?;
        // Reserve at most one timestamp unit's worth; larger batches grow
        let per_unit = usize::try_from(config.layout().max_sequence())
            .unwrap_or(usize::MAX)
            .saturating_add(1);
        let mut ids = Vec::with_capacity(count.min(per_unit).min(MAX_PREALLOCATED_IDS));
        for _ in 0..count {
            ids.push(self.step(&mut state)?);
        }
        Ok(ids)
    }

    /// One issuance step; the caller holds the lock
    fn step(&self, state: &mut GeneratorState) -> Result<u64, GeneratorError> {
        let config = state.active.ok_or(GeneratorError::NotInitialized)?;
        let layout = config.layout();

        let mut current = self.now_truncated(layout);
        if current < state.last_timestamp {
            return Err(GeneratorError::ClockRollback {
                last: state.last_timestamp,
                current,
            });
        }

        if current == state.last_timestamp {
            state.sequence = (state.sequence + 1) & layout.max_sequence();
            if state.sequence == 0 {
                current = wait_for_next(state.last_timestamp, config.spin_yield_every(), || {
                    self.now_truncated(layout)
                });
            }
        } else {
            state.sequence = 0;
        }

        state.last_timestamp = current;

        // Truncation already cleared the low timestamp_shift bits
        Ok(current | state.worker_prefix | state.sequence)
    }
}
