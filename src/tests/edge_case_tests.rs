//! Edge case tests for layout extremes and cross-worker uniqueness

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::{assert_ids_monotonic, assert_unique_ids, ManualClock};
    use crate::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    /// Widest timestamp: one unit is 16ns
    #[test]
    fn test_max_timestamp_bits_config() {
        let config = GeneratorConfig::builder()
            .worker_id(3)
            .timestamp_bits(60)
            .worker_bits(2)
            .sequence_bits(2)
            .build()
            .unwrap();
        let generator = Generator::with_config(config);

        let ids = generator.next_ids(200).unwrap();
        assert_ids_monotonic(&ids);
        assert!(ids.iter().all(|&id| config.extractor().worker_id(id) == 3));
    }

    /// Widest worker field with a single sequence bit
    #[test]
    fn test_max_worker_bits_config() {
        let worker = (1u64 << 30) - 1;
        let config = GeneratorConfig::builder()
            .worker_id(worker)
            .timestamp_bits(33)
            .worker_bits(30)
            .sequence_bits(1)
            .build()
            .unwrap();
        let clock = Arc::new(ManualClock::new(1 << 62));
        let generator = Generator::with_clock(config, Arc::clone(&clock));
        let extract = config.extractor();

        let a = generator.next_id().unwrap();
        let b = generator.next_id().unwrap();
        assert_eq!(extract.decompose(a), (1 << 31, worker, 0));
        assert_eq!(extract.decompose(b), (1 << 31, worker, 1));
    }

    /// Clock reading with the top bit set still orders correctly
    #[test]
    fn test_high_clock_values() {
        let clock = Arc::new(ManualClock::new(u64::MAX - 100));
        let config = GeneratorConfig::builder()
            .worker_id(1)
            .timestamp_bits(60)
            .worker_bits(2)
            .sequence_bits(2)
            .build()
            .unwrap();
        let generator = Generator::with_clock(config, Arc::clone(&clock));

        let a = generator.next_id().unwrap();
        clock.advance(32);
        let b = generator.next_id().unwrap();
        assert!(b > a);
        assert!(config.extractor().datetime(b).is_none());
    }

    /// IDs from different workers never collide, even on the same clock reading
    #[test]
    fn test_cross_worker_uniqueness() {
        let clock = Arc::new(ManualClock::new(1 << 50));
        let mut all_ids = HashSet::new();

        for worker in 0..10 {
            let config = GeneratorConfig::builder().worker_id(worker).build().unwrap();
            let generator = Generator::with_clock(config, Arc::clone(&clock));
            for id in generator.next_ids(100).unwrap() {
                assert!(all_ids.insert(id), "Collision from worker {worker}");
            }
        }
        assert_eq!(all_ids.len(), 1000);
    }

    /// Workers drawn from a shared counter produce disjoint ids
    #[test]
    fn test_workers_from_counter_source() {
        let layout = BitLayout::default();
        let source = CounterWorkerIdSource::for_layout(&layout);
        let mut ids = Vec::new();

        for _ in 0..4 {
            let config = GeneratorConfig::builder()
                .worker_id_from(&source)
                .unwrap()
                .build()
                .unwrap();
            ids.extend(Generator::with_config(config).next_ids(250).unwrap());
        }
        assert_unique_ids(&ids, 1000);
    }

    /// IDs come out already numerically sorted
    #[test]
    fn test_numeric_sorting() {
        let generator = Generator::new(1).unwrap();
        let ids: Vec<u64> = (0..100).map(|_| generator.next_id().unwrap()).collect();

        let mut sorted = ids.clone();
        sorted.sort();

        assert_eq!(ids, sorted, "IDs should already be numerically sorted");
    }

    #[test]
    fn test_every_width_rejects_zero_and_sixty_one() {
        for bits in [0u8, 61, 64, u8::MAX] {
            assert!(BitLayout::new(bits, 2, 2).is_err());
            assert!(BitLayout::new(2, bits, 2).is_err());
            assert!(BitLayout::new(2, 2, bits).is_err());
        }
    }
}
