//! Benchmark for eager map construction.
//!
//! Compares the MapEnvelope builders against collecting into a HashMap.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use deferrable::collection::MapEnvelope;
use std::collections::HashMap;
use std::hint::black_box;

fn entries(size: usize) -> Vec<(usize, usize)> {
    // Every fourth key repeats an earlier one so overwrites are exercised.
    (0..size).map(|index| (index - index / 4, index)).collect()
}

fn benchmark_of(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_of");

    for size in [100, 1_000, 10_000] {
        let input = entries(size);

        group.bench_with_input(
            BenchmarkId::new("envelope_of", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(MapEnvelope::of(input.iter().copied())));
            },
        );

        // Baseline
        group.bench_with_input(
            BenchmarkId::new("hashmap_collect", size),
            &input,
            |bencher, input| {
                bencher.iter(|| black_box(input.iter().copied().collect::<HashMap<_, _>>()));
            },
        );
    }

    group.finish();
}

fn benchmark_derived(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map_derived");

    for size in [100, 1_000, 10_000] {
        group.bench_with_input(
            BenchmarkId::new("derived", size),
            &size,
            |bencher, &size| {
                bencher.iter(|| {
                    black_box(MapEnvelope::derived(
                        |item: usize| Ok::<_, ()>(item % 512),
                        |item: usize| Ok::<_, ()>(item * 2),
                        0..size,
                    ))
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("extended", size),
            &size,
            |bencher, &size| {
                let source: HashMap<_, _> = (0..size).map(|index| (index, index)).collect();
                let additions = move || (0..size / 2).map(|index| (index, 0));
                bencher.iter(|| black_box(MapEnvelope::extended(source.clone(), additions())));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_of, benchmark_derived);

criterion_main!(benches);
