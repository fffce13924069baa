//! GeneratorConfig builder for constructing configuration

use super::{BitLayout, GeneratorConfig};
use crate::coordination::WorkerIdSource;
use crate::error::{ConfigError, CoordinationError};

/// Default configuration values
pub(crate) const DEFAULT_WORKER_ID: u64 = 0;
pub(crate) const DEFAULT_TIMESTAMP_BITS: u8 = 42;
pub(crate) const DEFAULT_WORKER_BITS: u8 = 10;
pub(crate) const DEFAULT_SEQUENCE_BITS: u8 = 12;
pub(crate) const DEFAULT_SPIN_YIELD_EVERY: u32 = 0;

/// Builder for GeneratorConfig
///
/// Setters never fail; every check runs in [`build`](Self::build).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfigBuilder {
    pub(super) worker_id: u64,
    pub(super) timestamp_bits: u8,
    pub(super) worker_bits: u8,
    pub(super) sequence_bits: u8,
    pub(super) spin_yield_every: u32,
}

impl GeneratorConfigBuilder {
    /// Create a new GeneratorConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            worker_id: DEFAULT_WORKER_ID,
            timestamp_bits: DEFAULT_TIMESTAMP_BITS,
            worker_bits: DEFAULT_WORKER_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            spin_yield_every: DEFAULT_SPIN_YIELD_EVERY,
        }
    }

    /// Set the worker ID. Must be unique among all live generators.
    pub const fn worker_id(mut self, worker_id: u64) -> Self {
        self.worker_id = worker_id;
        self
    }

    /// Take the worker ID from an external coordination source
    pub fn worker_id_from<S>(self, source: &S) -> Result<Self, CoordinationError>
    where
        S: WorkerIdSource + ?Sized,
    {
        Ok(self.worker_id(source.acquire()?))
    }

    /// Set the number of bits for the timestamp field (1-60)
    pub const fn timestamp_bits(mut self, bits: u8) -> Self {
        self.timestamp_bits = bits;
        self
    }

    /// Set the number of bits for the worker ID field (1-60)
    pub const fn worker_bits(mut self, bits: u8) -> Self {
        self.worker_bits = bits;
        self
    }

    /// Set the number of bits for the sequence field (1-60)
    pub const fn sequence_bits(mut self, bits: u8) -> Self {
        self.sequence_bits = bits;
        self
    }

    /// Yield the thread every N clock polls while waiting for the next
    /// timestamp unit. 0 spins without yielding.
    pub const fn spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    /// Validate and build the final GeneratorConfig
    pub fn build(self) -> Result<GeneratorConfig, ConfigError> {
        let layout = BitLayout::new(self.timestamp_bits, self.worker_bits, self.sequence_bits)?;
        let config = GeneratorConfig::new(self.worker_id, layout)?;
        Ok(config.with_spin_yield_every(self.spin_yield_every))
    }
}

impl Default for GeneratorConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl From<GeneratorConfig> for GeneratorConfigBuilder {
    fn from(config: GeneratorConfig) -> Self {
        let layout = config.layout();
        Self {
            worker_id: config.worker_id(),
            timestamp_bits: layout.timestamp_bits(),
            worker_bits: layout.worker_bits(),
            sequence_bits: layout.sequence_bits(),
            spin_yield_every: config.spin_yield_every(),
        }
    }
}
