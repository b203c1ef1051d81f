use benchmarks::Metrics;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn series(n: usize) -> (Vec<f64>, Vec<f64>) {
    let y_true: Vec<f64> = (0..n).map(|i| 300.0 + i as f64 * 0.1).collect();
    let y_pred: Vec<f64> = y_true.iter().map(|y| y + 25.0).collect();
    (y_true, y_pred)
}

fn bench_each_metric(c: &mut Criterion) {
    for size in [1_000, 10_000, 100_000] {
        let (y_true, y_pred) = series(size);
        let mut group = c.benchmark_group(format!("metrics_{}", size));

        group.bench_function("mse", |b| {
            b.iter(|| Metrics::mse(black_box(&y_true), black_box(&y_pred)))
        });
        group.bench_function("rmse", |b| {
            b.iter(|| Metrics::rmse(black_box(&y_true), black_box(&y_pred)))
        });
        group.bench_function("mae", |b| {
            b.iter(|| Metrics::mae(black_box(&y_true), black_box(&y_pred)))
        });
        group.bench_function("r_squared", |b| {
            b.iter(|| Metrics::r_squared(black_box(&y_true), black_box(&y_pred)))
        });

        group.finish();
    }
}

fn bench_calculate_all(c: &mut Criterion) {
    for size in [100, 10_000, 1_000_000] {
        let (y_true, y_pred) = series(size);
        c.bench_with_input(BenchmarkId::new("calculate_all", size), &size, |b, _| {
            b.iter(|| Metrics::calculate_all(black_box(&y_true), black_box(&y_pred)))
        });
    }
}

criterion_group!(benches, bench_each_metric, bench_calculate_all);
criterion_main!(benches);
