//! Core ID generator implementation
//!
//! Split into modules for testability:
//! - `state` - Mutable state behind the generator lock
//! - `time` - Clock source and timestamp truncation
//! - `wait` - Spin wait for the next timestamp unit
//! - `generate` - ID generation logic

mod generate;
mod state;
pub(crate) mod time;
mod wait;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;

use crate::config::{BitLayout, GeneratorConfig, GeneratorConfigBuilder};
use crate::error::ConfigError;
use crate::extractor::IdExtractor;

use state::GeneratorState;
use time::{nanos_to_datetime, truncate, SystemClock, TimeSource};

/// Lock-guarded ID generator
///
/// All issuance and reconfiguration goes through a single mutex, so one
/// instance can be shared between threads (e.g. behind an `Arc`).
#[derive(Debug)]
pub struct Generator<T: TimeSource = SystemClock> {
    state: Mutex<GeneratorState>,
    clock: T,
}

impl Generator<SystemClock> {
    /// Create an initialized generator for `worker_id` on the default layout
    pub fn new(worker_id: u64) -> Result<Self, ConfigError> {
        let config = GeneratorConfig::builder().worker_id(worker_id).build()?;
        Ok(Self::with_config(config))
    }

    /// Create an initialized generator from a validated configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Create an uninitialized generator with default settings.
    /// Configure it with the `set_*` methods, then call [`init`](Self::init).
    pub fn create() -> Self {
        Self::create_with_clock(SystemClock)
    }
}

impl Default for Generator<SystemClock> {
    fn default() -> Self {
        Self::create()
    }
}

impl<T: TimeSource> Generator<T> {
    /// Create an initialized generator reading time from `clock`
    pub fn with_clock(config: GeneratorConfig, clock: T) -> Self {
        let generator = Self::create_with_clock(clock);
        {
            let mut state = generator.state.lock();
            let started_at = generator.now_truncated(config.layout());
            state.activate(config, started_at);
        }
        generator
    }

    /// Create an uninitialized generator reading time from `clock`
    pub fn create_with_clock(clock: T) -> Self {
        Self {
            state: Mutex::new(GeneratorState::uninitialized(GeneratorConfigBuilder::new())),
            clock,
        }
    }

    /// Set the worker ID. Clears initialization.
    pub fn set_worker_id(&self, worker_id: u64) -> &Self {
        self.reconfigure(|b| b.worker_id(worker_id))
    }

    /// Set the timestamp field width. Clears initialization.
    pub fn set_timestamp_bits(&self, bits: u8) -> &Self {
        self.reconfigure(|b| b.timestamp_bits(bits))
    }

    /// Set the worker field width. Clears initialization.
    pub fn set_worker_bits(&self, bits: u8) -> &Self {
        self.reconfigure(|b| b.worker_bits(bits))
    }

    /// Set the sequence field width. Clears initialization.
    pub fn set_sequence_bits(&self, bits: u8) -> &Self {
        self.reconfigure(|b| b.sequence_bits(bits))
    }

    /// Set the spin yield cadence used while waiting for the next
    /// timestamp unit. Clears initialization.
    pub fn set_spin_yield_every(&self, n: u32) -> &Self {
        self.reconfigure(|b| b.spin_yield_every(n))
    }

    fn reconfigure<F>(&self, update: F) -> &Self
    where
        F: FnOnce(GeneratorConfigBuilder) -> GeneratorConfigBuilder,
    {
        self.state.lock().reconfigure(update);
        self
    }

    /// Validate the current settings and enable issuance
    ///
    /// Resets the last timestamp and sequence to zero. A no-op when the
    /// generator is already initialized.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the widths are malformed or the worker
    /// ID does not fit; the generator then stays uninitialized.
    pub fn init(&self) -> Result<&Self, ConfigError> {
        let mut state = self.state.lock();
        if state.is_initialized() {
            return Ok(self);
        }
        let config = state.validate()?;
        let started_at = self.now_truncated(config.layout());
        state.activate(config, started_at);
        Ok(self)
    }

    /// Whether issuance is currently allowed
    pub fn is_initialized(&self) -> bool {
        self.state.lock().is_initialized()
    }

    /// Active configuration, if initialized
    pub fn config(&self) -> Option<GeneratorConfig> {
        self.state.lock().active
    }

    /// Extractor matching the active layout, if initialized
    pub fn extractor(&self) -> Option<IdExtractor> {
        self.config().map(|config| config.extractor())
    }

    /// Wall-clock time of the last successful `init`, truncated to the
    /// timestamp precision
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        let state = self.state.lock();
        if !state.is_initialized() {
            return None;
        }
        nanos_to_datetime(state.started_at)
    }

    /// Current clock reading truncated to the layout's timestamp precision
    #[inline(always)]
    pub(crate) fn now_truncated(&self, layout: BitLayout) -> u64 {
        truncate(self.clock.now_nanos(), layout.truncation_shift())
    }
}
