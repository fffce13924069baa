//! Mutable generator state guarded by the generator lock

use crate::config::{GeneratorConfig, GeneratorConfigBuilder};
use crate::error::ConfigError;

/// Everything `next_id` reads or writes, updated together under one lock
#[derive(Debug)]
pub(crate) struct GeneratorState {
    /// Settings as last written by the mutators, not yet validated
    pub(crate) settings: GeneratorConfigBuilder,
    /// Active configuration; `Some` exactly when initialized
    pub(crate) active: Option<GeneratorConfig>,
    /// Last truncated timestamp used to mint an id
    pub(crate) last_timestamp: u64,
    /// Counter within the current timestamp unit
    pub(crate) sequence: u64,
    /// Worker ID pre-shifted into its bit position
    pub(crate) worker_prefix: u64,
    /// Truncated clock reading taken at activation
    pub(crate) started_at: u64,
}

impl GeneratorState {
    pub(crate) fn uninitialized(settings: GeneratorConfigBuilder) -> Self {
        Self {
            settings,
            active: None,
            last_timestamp: 0,
            sequence: 0,
            worker_prefix: 0,
            started_at: 0,
        }
    }

    #[inline(always)]
    pub(crate) fn is_initialized(&self) -> bool {
        self.active.is_some()
    }

    /// Replace the pending settings and drop initialization
    pub(crate) fn reconfigure<F>(&mut self, update: F)
    where
        F: FnOnce(GeneratorConfigBuilder) -> GeneratorConfigBuilder,
    {
        self.settings = update(self.settings);
        self.active = None;
    }

    /// Validate the pending settings. Nothing changes on failure.
    pub(crate) fn validate(&self) -> Result<GeneratorConfig, ConfigError> {
        self.settings.build()
    }

    /// Switch to `config`, clearing the timestamp and sequence
    pub(crate) fn activate(&mut self, config: GeneratorConfig, started_at: u64) {
        self.settings = GeneratorConfigBuilder::from(config);
        self.worker_prefix = config.worker_prefix();
        self.last_timestamp = 0;
        self.sequence = 0;
        self.started_at = started_at;
        self.active = Some(config);
    }
}
