use criterion::{black_box, criterion_group, criterion_main, Criterion};
use nalgebra::DMatrix;
use population_stability::{calculate_psi, Axis, StabilityIndex};

fn deterministic_matrix(rows: usize, cols: usize, offset: f64) -> DMatrix<f64> {
    DMatrix::from_fn(rows, cols, |r, c| {
        offset + ((r * 31 + c * 17) as f64 * 1.234) % 1000.0
    })
}

fn bench_psi(c: &mut Criterion) {
    let mut group = c.benchmark_group("population_stability");

    let expected = deterministic_matrix(10_000, 10, 0.0);
    let actual = deterministic_matrix(10_000, 10, 50.0);

    group.bench_function("10k_rows_10_vars_10_buckets", |b| {
        b.iter(|| {
            let values = calculate_psi(
                black_box(&expected),
                black_box(&actual),
                10,
                Axis::Columns,
            )
            .unwrap();
            black_box(values)
        });
    });

    group.bench_function("10k_rows_10_vars_100_buckets", |b| {
        b.iter(|| {
            let report = StabilityIndex::new()
                .buckets(100)
                .check(black_box(&expected), black_box(&actual))
                .unwrap();
            black_box(report.values())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_psi);
criterion_main!(benches);
