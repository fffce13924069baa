//! Bit layout of a 64-bit identifier
//!
//! `| timestamp (high) | worker id | sequence (low) |`

use super::builder::{DEFAULT_SEQUENCE_BITS, DEFAULT_TIMESTAMP_BITS, DEFAULT_WORKER_BITS};
use crate::error::ConfigError;

/// Total width of an identifier
pub const ID_BITS: u8 = 64;
/// Narrowest width a single field may have
pub const MIN_FIELD_BITS: u8 = 1;
/// Widest width a single field may have
pub const MAX_FIELD_BITS: u8 = 60;

/// Validated field widths and the shifts and maxima derived from them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BitLayout {
    timestamp_bits: u8,
    worker_bits: u8,
    sequence_bits: u8,
    max_worker_id: u64,
    max_sequence: u64,
}

impl BitLayout {
    /// Validate the three widths and derive the layout constants
    pub fn new(timestamp_bits: u8, worker_bits: u8, sequence_bits: u8) -> Result<Self, ConfigError> {
        Self::check_width("Timestamp", timestamp_bits)?;
        Self::check_width("Worker", worker_bits)?;
        Self::check_width("Sequence", sequence_bits)?;

        let total = timestamp_bits as u32 + worker_bits as u32 + sequence_bits as u32;
        if total != ID_BITS as u32 {
            return Err(ConfigError::WidthSum { total });
        }

        Ok(Self {
            timestamp_bits,
            worker_bits,
            sequence_bits,
            max_worker_id: Self::calculate_mask(worker_bits),
            max_sequence: Self::calculate_mask(sequence_bits),
        })
    }

    fn check_width(field: &'static str, bits: u8) -> Result<(), ConfigError> {
        if !(MIN_FIELD_BITS..=MAX_FIELD_BITS).contains(&bits) {
            return Err(ConfigError::InvalidBitWidth { field, bits });
        }
        Ok(())
    }

    /// Calculate mask for given number of bits (at most 60)
    #[inline]
    pub(crate) const fn calculate_mask(bits: u8) -> u64 {
        (1u64 << bits) - 1
    }

    #[inline(always)]
    pub const fn timestamp_bits(&self) -> u8 {
        self.timestamp_bits
    }

    #[inline(always)]
    pub const fn worker_bits(&self) -> u8 {
        self.worker_bits
    }

    #[inline(always)]
    pub const fn sequence_bits(&self) -> u8 {
        self.sequence_bits
    }

    #[inline(always)]
    pub const fn max_worker_id(&self) -> u64 {
        self.max_worker_id
    }

    #[inline(always)]
    pub const fn max_sequence(&self) -> u64 {
        self.max_sequence
    }

    /// Left shift applied to the worker id
    #[inline(always)]
    pub const fn worker_shift(&self) -> u8 {
        self.sequence_bits
    }

    /// Bit offset of the timestamp field
    #[inline(always)]
    pub const fn timestamp_shift(&self) -> u8 {
        self.sequence_bits + self.worker_bits
    }

    /// Low bits of a nanosecond clock reading dropped by truncation.
    /// Always equal to `timestamp_shift`.
    #[inline(always)]
    pub const fn truncation_shift(&self) -> u8 {
        ID_BITS - self.timestamp_bits
    }

    #[inline(always)]
    pub(crate) const fn timestamp_mask(&self) -> u64 {
        Self::calculate_mask(self.timestamp_bits)
    }
}

impl Default for BitLayout {
    /// 42-bit timestamp, 10-bit worker id, 12-bit sequence
    fn default() -> Self {
        Self {
            timestamp_bits: DEFAULT_TIMESTAMP_BITS,
            worker_bits: DEFAULT_WORKER_BITS,
            sequence_bits: DEFAULT_SEQUENCE_BITS,
            max_worker_id: Self::calculate_mask(DEFAULT_WORKER_BITS),
            max_sequence: Self::calculate_mask(DEFAULT_SEQUENCE_BITS),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derived_constants() {
        let layout = BitLayout::new(41, 10, 13).unwrap();
        assert_eq!(layout.max_worker_id(), 0x3FF);
        assert_eq!(layout.max_sequence(), 0x1FFF);
        assert_eq!(layout.worker_shift(), 13);
        assert_eq!(layout.timestamp_shift(), 23);
        assert_eq!(layout.truncation_shift(), 23);
    }

    #[test]
    fn test_default_layout_is_valid() {
        let layout = BitLayout::default();
        assert_eq!(
            BitLayout::new(
                layout.timestamp_bits(),
                layout.worker_bits(),
                layout.sequence_bits()
            ),
            Ok(layout)
        );
        assert_eq!(layout.max_worker_id(), 0x3FF);
        assert_eq!(layout.max_sequence(), 0xFFF);
    }

    #[test]
    fn test_width_out_of_range() {
        assert_eq!(
            BitLayout::new(0, 32, 32),
            Err(ConfigError::InvalidBitWidth {
                field: "Timestamp",
                bits: 0
            })
        );
        assert_eq!(
            BitLayout::new(2, 61, 1),
            Err(ConfigError::InvalidBitWidth {
                field: "Worker",
                bits: 61
            })
        );
        assert_eq!(
            BitLayout::new(60, 4, 0),
            Err(ConfigError::InvalidBitWidth {
                field: "Sequence",
                bits: 0
            })
        );
    }

    #[test]
    fn test_width_sum_mismatch() {
        assert_eq!(
            BitLayout::new(41, 10, 12),
            Err(ConfigError::WidthSum { total: 63 })
        );
        assert_eq!(
            BitLayout::new(60, 60, 60),
            Err(ConfigError::WidthSum { total: 180 })
        );
    }

    #[test]
    fn test_extreme_layouts() {
        let wide_ts = BitLayout::new(60, 2, 2).unwrap();
        assert_eq!(wide_ts.max_sequence(), 3);
        assert_eq!(wide_ts.truncation_shift(), 4);

        let wide_seq = BitLayout::new(2, 2, 60).unwrap();
        assert_eq!(wide_seq.max_sequence(), (1u64 << 60) - 1);
        assert_eq!(wide_seq.timestamp_shift(), 62);
    }
}
