use snowgen::{Generator, IdExtractor};

fn main() {
    // Create a generator with worker ID 1 on the default 42/10/12 layout
    let generator = Generator::new(1).unwrap();
    let extract = generator.extractor().unwrap();

    // Generate some IDs
    let id1 = generator.next_id().unwrap();
    let id2 = generator.next_id().unwrap();
    let id3 = generator.next_id().unwrap();

    println!("Generated IDs (guaranteed to be monotonic):");
    print_id(id1, &extract);
    print_id(id2, &extract);
    print_id(id3, &extract);

    // Or a batch in one go
    let batch = generator.next_ids(5).unwrap();
    println!("\nBatch of {}:", batch.len());
    for id in batch {
        print_id(id, &extract);
    }

    if let Some(started) = generator.started_at() {
        println!("\nGenerator started at {started}");
    }
}

fn print_id(id: u64, extract: &IdExtractor) {
    let (timestamp, worker, sequence) = extract.decompose(id);
    let datetime = extract
        .datetime(id)
        .map(|d| d.to_rfc3339())
        .unwrap_or_else(|| "out of range".to_string());

    println!("  ID: {id}, Timestamp unit: {timestamp}, Human date: {datetime}, Worker ID: {worker}, Sequence: {sequence}");
}
