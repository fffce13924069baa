//! Decomposing generated IDs back into their fields

#[cfg(test)]
mod tests {
    use crate::tests::test_utils::ManualClock;
    use crate::*;

    #[test]
    fn test_decompose_recovers_worker_id() {
        for (t, w, s, worker) in [(42, 10, 12, 1023), (48, 5, 11, 17), (41, 3, 20, 5), (55, 8, 1, 200)] {
            let config = GeneratorConfig::builder()
                .worker_id(worker)
                .timestamp_bits(t)
                .worker_bits(w)
                .sequence_bits(s)
                .build()
                .unwrap();
            let generator = Generator::with_config(config);
            let extract = config.extractor();

            for id in generator.next_ids(50).unwrap() {
                let (_, node, sequence) = extract.decompose(id);
                assert_eq!(node, worker, "layout {t}/{w}/{s}");
                assert!(sequence <= config.layout().max_sequence());
            }
        }
    }

    #[test]
    fn test_timestamp_field_holds_clock_high_bits() {
        let nanos = 1_750_000_000_123_456_789u64;
        let config = GeneratorConfig::builder().worker_id(3).build().unwrap();
        let generator = Generator::with_clock(config, ManualClock::new(nanos));
        let extract = config.extractor();

        let id = generator.next_id().unwrap();
        assert_eq!(extract.timestamp(id), nanos >> 22);
        assert_eq!(extract.clock_nanos(id), (nanos >> 22) << 22);
        assert!(nanos - extract.clock_nanos(id) < 1 << 22);
    }

    #[test]
    fn test_id_bit_structure() {
        let config = GeneratorConfig::builder()
            .worker_id(0b10_1010_1010)
            .build()
            .unwrap();
        let generator = Generator::with_config(config);
        let extract = config.extractor();

        let id = generator.next_id().unwrap();

        // seq=12 bits, worker=10 bits, ts=42 bits, no gap between fields
        let seq_mask = 0xFFF;
        let worker_mask = 0x3FF << 12;
        let ts_mask = !0u64 << 22;

        assert_eq!(id & seq_mask, extract.sequence(id));
        assert_eq!((id & worker_mask) >> 12, 0b10_1010_1010);
        assert_eq!((id & ts_mask) >> 22, extract.timestamp(id));
        assert_eq!(seq_mask | worker_mask | ts_mask, u64::MAX);
    }

    #[test]
    fn test_datetime_matches_wall_clock() {
        let generator = Generator::new(1).unwrap();
        let extract = generator.extractor().unwrap();

        let id = generator.next_id().unwrap();
        let date = extract.datetime(id).unwrap();
        let drift = chrono::Utc::now() - date;

        assert!(drift >= chrono::Duration::zero());
        assert!(drift < chrono::Duration::seconds(1));
    }

    #[test]
    fn test_decomposition_roundtrip() {
        let config = GeneratorConfig::builder().worker_id(42).build().unwrap();
        let generator = Generator::with_config(config);
        let extract = config.extractor();

        for id in generator.next_ids(100).unwrap() {
            let (ts, worker, seq) = extract.decompose(id);
            let rebuilt = (ts << 22) | (worker << 12) | seq;
            assert_eq!(id, rebuilt);
        }
    }
}
