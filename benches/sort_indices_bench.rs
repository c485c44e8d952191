use criterion::{BatchSize, BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use primkern::sort_indices;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use std::hint::black_box;

fn bench_sort_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_indices");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for &size in &[1_000usize, 10_000, 100_000, 1_000_000] {
        let uniform: Vec<f64> = (0..size).map(|_| rng.random_range(0.0..1.0)).collect();
        let few_values: Vec<f64> = (0..size).map(|_| rng.random_range(0..16) as f64).collect();
        let ascending: Vec<f64> = (0..size).map(|i| i as f64).collect();

        group.throughput(Throughput::Elements(size as u64));

        for (label, data) in [
            ("uniform", &uniform),
            ("few_values", &few_values),
            ("ascending", &ascending),
        ] {
            group.bench_with_input(BenchmarkId::new(format!("quicksort/{label}"), size), data, |b, data| {
                b.iter_batched_ref(
                    || (0..size).collect::<Vec<usize>>(),
                    |indices| sort_indices(black_box(indices), data, 0, size),
                    BatchSize::LargeInput,
                )
            });

            group.bench_with_input(
                BenchmarkId::new(format!("std_sort_unstable_by/{label}"), size),
                data,
                |b, data| {
                    b.iter_batched_ref(
                        || (0..size).collect::<Vec<usize>>(),
                        |indices| {
                            black_box(indices).sort_unstable_by(|&a, &b| data[a].total_cmp(&data[b]))
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_sort_indices);
criterion_main!(benches);
