//! # snowgen
//!
//! Snowflake-style 64-bit ID generator with a configurable bit layout.
//!
//! An ID packs three fields, high to low:
//! - timestamp: the high bits of a nanosecond wall clock
//! - worker ID: unique per running generator, assigned externally
//! - sequence: counter within one timestamp unit
//!
//! The three widths are configurable and must sum to 64. IDs from one
//! generator are unique and strictly increasing; a clock that moves
//! backwards is reported as an error instead of being papered over.
//!
//! ```
//! use snowgen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig::builder()
//!     .worker_id(7)
//!     .timestamp_bits(48)
//!     .worker_bits(5)
//!     .sequence_bits(11)
//!     .build()
//!     .unwrap();
//! let generator = Generator::with_config(config);
//!
//! let id = generator.next_id().unwrap();
//! let (_, worker, _) = config.extractor().decompose(id);
//! assert_eq!(worker, 7);
//! ```

#![forbid(unsafe_code)]

mod config;
mod coordination;
mod error;
mod extractor;
mod generator;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{BitLayout, GeneratorConfig, GeneratorConfigBuilder};
pub use config::{ID_BITS, MAX_FIELD_BITS, MIN_FIELD_BITS};
pub use coordination::{CounterWorkerIdSource, WorkerIdSource};
pub use error::{ConfigError, CoordinationError, GeneratorError};
pub use extractor::IdExtractor;
pub use generator::time::{unix_time_nanos, SystemClock, TimeSource};
pub use generator::Generator;
