use snowgen::{Generator, GeneratorConfig};

fn main() {
    // 48-bit timestamp (~16µs units), 32 workers, 2048 ids per unit
    let config = GeneratorConfig::builder()
        .worker_id(17)
        .timestamp_bits(48)
        .worker_bits(5)
        .sequence_bits(11)
        .build()
        .unwrap();
    let layout = config.layout();

    println!("Generator configuration:");
    println!("  Timestamp bits: {}", layout.timestamp_bits());
    println!("  Worker bits: {}", layout.worker_bits());
    println!("  Sequence bits: {}", layout.sequence_bits());
    println!("  Max worker ID: {}", layout.max_worker_id());
    println!("  Max sequence per unit: {}", layout.max_sequence());
    println!("  Timestamp unit: {} ns", 1u64 << layout.truncation_shift());

    let generator = Generator::with_config(config);
    let id = generator.next_id().unwrap();
    let (ts, worker, seq) = config.extractor().decompose(id);

    println!("\nGenerated ID: {id}");
    println!("Components:");
    println!("  Timestamp: {ts} units");
    println!("  Worker ID: {worker} (of {})", layout.max_worker_id());
    println!("  Sequence: {seq} (of {})", layout.max_sequence());

    // The same setup through the mutation API
    let mutable = Generator::create();
    match mutable.set_worker_id(99).set_worker_bits(5).init() {
        Ok(_) => println!("\nunexpected: widths should not sum to 64"),
        Err(e) => println!("\nRejected configuration: {e}"),
    }
    mutable
        .set_worker_id(17)
        .set_timestamp_bits(48)
        .set_sequence_bits(11)
        .init()
        .unwrap();
    println!("Mutable generator issued {}", mutable.next_id().unwrap());
}
