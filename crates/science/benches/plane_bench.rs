//! Criterion benchmarks for angle normalization and vector construction.
//! Results land under target/criterion.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};
use science::{Angle, Vector};

fn random_components(n: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| (rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)))
        .collect()
}

fn bench_angle(c: &mut Criterion) {
    let mut group = c.benchmark_group("angle");
    // turns away from [0, 360): the add/subtract loops scale with this
    for &turns in &[0.0f64, 10.0, 1000.0, 1.0e5] {
        group.bench_with_input(
            BenchmarkId::new("from_degrees", turns as u64),
            &turns,
            |b, &turns| b.iter(|| Angle::from_degrees(-(turns * 360.0) - 17.5)),
        );
    }
    group.finish();
}

fn bench_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("vector");
    group.bench_function("cartesian_batch_64", |b| {
        b.iter_batched(
            || random_components(64, 43),
            |pts| {
                for (x, y) in pts {
                    let _v = Vector::cartesian(x, y);
                }
            },
            BatchSize::SmallInput,
        )
    });
    group.bench_function("linear_combination", |b| {
        let w = Vector::cartesian(16.0, 26.0).unwrap();
        let u = Vector::cartesian(2.0, 5.0).unwrap();
        let v = Vector::cartesian(3.0, 4.0).unwrap();
        b.iter(|| w.linear_combination(&u, &v))
    });
    group.finish();
}

criterion_group!(benches, bench_angle, bench_vector);
criterion_main!(benches);
