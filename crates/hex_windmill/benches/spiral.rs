mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hex_windmill::prelude::{slot_count, SectorLayout, SlotIndex, SpiralEnumerator};

fn bench_generate(c: &mut Criterion, bench_name: &str, bucket_count: usize, max_rings: usize) {
    let enumerator = SpiralEnumerator::windmill(bucket_count);

    let mut group = c.benchmark_group(bench_name);
    group.throughput(common::elements_throughput(slot_count(max_rings)));

    group.bench_function("generate", |b| {
        b.iter(|| {
            let slots = enumerator.generate(black_box(max_rings));
            black_box(slots.len());
        });
    });

    group.finish();
}

pub fn spiral_benches(c: &mut Criterion) {
    bench_generate(c, "spiral/windmill/6_buckets/10_rings", 6, 10);
    bench_generate(c, "spiral/windmill/6_buckets/25_rings", 6, 25);
    bench_generate(c, "spiral/windmill/11_buckets/25_rings", 11, 25);

    let angular = SpiralEnumerator::new(6, SectorLayout::FixedAngular);
    let mut group = c.benchmark_group("spiral/angular/6_buckets/25_rings");
    group.throughput(common::elements_throughput(slot_count(25)));
    group.bench_function("generate", |b| {
        b.iter(|| {
            let slots = angular.generate(black_box(25));
            black_box(slots.len());
        });
    });
    group.finish();

    let slots = SpiralEnumerator::windmill(6).generate(25);
    let index = SlotIndex::from_slots(&slots);
    let mut group = c.benchmark_group("spiral/slot_index/25_rings");
    group.throughput(common::elements_throughput(slots.len()));
    group.bench_function("lookup_all", |b| {
        b.iter(|| {
            for slot in &slots {
                black_box(index.get(slot.coord));
            }
        });
    });
    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = spiral_benches
}
criterion_main!(benches);
