use thiserror::Error;

/// Errors raised while validating a generator configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A single field width is outside [1, 60]
    #[error("{field} bits {bits} must be between 1 and 60")]
    InvalidBitWidth { field: &'static str, bits: u8 },
    /// The three field widths do not fill the 64-bit word exactly
    #[error("Timestamp, worker and sequence bits must sum to 64, got {total}")]
    WidthSum { total: u32 },
    /// Worker ID does not fit in the configured worker field
    #[error("Worker ID {worker_id} is invalid. Maximum allowed value is {max}")]
    InvalidWorkerId { worker_id: u64, max: u64 },
}

/// Errors raised while issuing identifiers
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GeneratorError {
    /// Issuance attempted before a successful `init()`
    #[error("Generator is not initialized. Call init() before requesting ids")]
    NotInitialized,
    /// Clock reading is earlier than the last timestamp used
    #[error("Clock moved backwards. Refusing to generate id: last timestamp {last}, current {current}")]
    ClockRollback { last: u64, current: u64 },
}

impl GeneratorError {
    /// Distance the clock moved backwards, in truncated timestamp units.
    /// `None` unless `last` is at or after `current`.
    pub fn rollback_delta(&self) -> Option<u64> {
        match self {
            GeneratorError::ClockRollback { last, current } => last.checked_sub(*current),
            GeneratorError::NotInitialized => None,
        }
    }
}

/// Errors raised by a worker ID source
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoordinationError {
    /// Every worker ID the source may hand out has been used
    #[error("Worker ID source exhausted. No ids left below limit {limit}")]
    Exhausted { limit: u64 },
}
