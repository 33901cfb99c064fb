use std::time::Duration;

use criterion::{Criterion, Throughput};
use hex_windmill::prelude::Item;

pub const SAMPLE_SIZE: usize = 20;
pub const WARM_UP: Duration = Duration::from_secs(1);
pub const MEASUREMENT_TIME: Duration = Duration::from_secs(2);

pub fn default_criterion() -> Criterion {
    Criterion::default()
        .configure_from_args()
        .sample_size(SAMPLE_SIZE)
        .warm_up_time(WARM_UP)
        .measurement_time(MEASUREMENT_TIME)
}

pub fn elements_throughput(elements: usize) -> Throughput {
    Throughput::Elements(elements.max(1) as u64)
}

/// Deterministic item population spread over the given bucket count.
#[allow(dead_code)]
pub fn make_items(count: usize, bucket_count: usize) -> Vec<Item> {
    (0..count)
        .map(|i| {
            Item::new(format!("app{i}"), format!("App {i}"))
                .with_usage(((i * 37) % 1000) as u64)
                .with_last_used(((i * 101) % 10_000) as u64)
                .with_bucket(i % bucket_count)
        })
        .collect()
}
