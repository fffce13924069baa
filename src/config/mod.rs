//! Configuration for the ID generator

mod builder;
mod layout;

pub use builder::GeneratorConfigBuilder;
pub use layout::{BitLayout, ID_BITS, MAX_FIELD_BITS, MIN_FIELD_BITS};

use crate::error::ConfigError;
use crate::extractor::IdExtractor;

/// Validated generator configuration
///
/// Immutable once built: changing anything goes back through the builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    worker_id: u64,
    layout: BitLayout,
    spin_yield_every: u32,
}

impl GeneratorConfig {
    pub const DEFAULT_TIMESTAMP_BITS: u8 = builder::DEFAULT_TIMESTAMP_BITS;
    pub const DEFAULT_WORKER_BITS: u8 = builder::DEFAULT_WORKER_BITS;
    pub const DEFAULT_SEQUENCE_BITS: u8 = builder::DEFAULT_SEQUENCE_BITS;

    /// Create a configuration for `worker_id` on an already validated layout
    pub fn new(worker_id: u64, layout: BitLayout) -> Result<Self, ConfigError> {
        let max = layout.max_worker_id();
        if worker_id > max {
            return Err(ConfigError::InvalidWorkerId { worker_id, max });
        }
        Ok(Self {
            worker_id,
            layout,
            spin_yield_every: builder::DEFAULT_SPIN_YIELD_EVERY,
        })
    }

    /// Create a new configuration builder
    pub fn builder() -> GeneratorConfigBuilder {
        GeneratorConfigBuilder::new()
    }

    pub(crate) const fn with_spin_yield_every(mut self, n: u32) -> Self {
        self.spin_yield_every = n;
        self
    }

    #[inline(always)]
    pub const fn worker_id(&self) -> u64 {
        self.worker_id
    }

    #[inline(always)]
    pub const fn layout(&self) -> BitLayout {
        self.layout
    }

    #[inline(always)]
    pub const fn spin_yield_every(&self) -> u32 {
        self.spin_yield_every
    }

    /// Worker ID pre-shifted into its bit position
    #[inline(always)]
    pub const fn worker_prefix(&self) -> u64 {
        self.worker_id << self.layout.worker_shift()
    }

    /// Extractor for decomposing IDs built with this layout
    pub fn extractor(&self) -> IdExtractor {
        IdExtractor::new(self.layout)
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            worker_id: builder::DEFAULT_WORKER_ID,
            layout: BitLayout::default(),
            spin_yield_every: builder::DEFAULT_SPIN_YIELD_EVERY,
        }
    }
}
