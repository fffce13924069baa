use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use flexi_logger::{colored_detailed_format, Logger};
use log::{error, info};
use rand::{rng, Rng};
use snowgen::{BitLayout, CounterWorkerIdSource, Generator, GeneratorConfig, GeneratorError};

fn main() {
    // logger init
    Logger::try_with_str("debug")
        .unwrap()
        .format(colored_detailed_format)
        .start()
        .unwrap();

    // Stands in for the shared counter every process increments at startup
    let layout = BitLayout::default();
    let source = Arc::new(CounterWorkerIdSource::for_layout(&layout));
    let mut handles = vec![];

    // Each thread plays one process with its own generator
    for process in 0..4 {
        let source = Arc::clone(&source);
        handles.push(thread::spawn(move || {
            let config = GeneratorConfig::builder()
                .worker_id_from(source.as_ref())
                .unwrap()
                .build()
                .unwrap();
            let generator = Generator::with_config(config);
            info!("process {process} running as worker {}", config.worker_id());

            let mut ids = HashSet::new();
            let mut rng = rng();
            for _ in 0..5 {
                match generator.next_ids(3) {
                    Ok(batch) => ids.extend(batch),
                    Err(e @ GeneratorError::ClockRollback { .. }) => {
                        error!("process {process}: {e}");
                        break;
                    }
                    Err(e) => panic!("process {process}: {e}"),
                }
                thread::sleep(Duration::from_millis(rng.random_range(0..=9)));
            }
            ids
        }));
    }

    let mut all_ids = HashSet::new();
    for handle in handles {
        let ids = handle.join().unwrap();
        for id in ids {
            assert!(all_ids.insert(id), "Duplicate ID generated!");
        }
    }

    info!("total unique IDs generated: {}", all_ids.len());
    info!("worker ids handed out: {}", source.last_issued());
}
