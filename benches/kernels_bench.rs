//! Benchmarks for the dot product paths, element-wise multiply and sampling

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use math_services::{dot_accumulate, DotStrategy, MathServices, ServiceConfig, Vector};

/// Generate deterministic test data
fn generate_test_data(size: usize, salt: i32) -> Vec<i32> {
    (0..size as i32)
        .map(|i| (i.wrapping_mul(31).wrapping_add(salt)) % 1000 - 500)
        .collect()
}

/// Compare the view and accumulate dot product realizations
fn bench_dot_product(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot_product");
    let view = MathServices::new().vector_calcs::<i32>().unwrap();
    let looped = MathServices::with_config(
        ServiceConfig::default().with_dot_strategy(DotStrategy::Accumulate),
    )
    .unwrap()
    .vector_calcs::<i32>()
    .unwrap();

    for &size in &[64usize, 1024, 65536] {
        let x = Vector::new(generate_test_data(size, 1));
        let y = Vector::new(generate_test_data(size, 7));

        group.bench_with_input(BenchmarkId::new("view", size), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(view.dot(x, y).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("accumulate", size), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(looped.dot(x, y).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("raw_loop", size), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(dot_accumulate(x.components(), y.components())));
        });
    }
    group.finish();
}

fn bench_multiply(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiply");
    let calc = MathServices::new().array_calculator();

    for &size in &[64usize, 1024, 65536] {
        let x = generate_test_data(size, 3);
        let y = generate_test_data(size, 5);
        group.bench_with_input(BenchmarkId::from_parameter(size), &(&x, &y), |b, (x, y)| {
            b.iter(|| black_box(calc.multiply(x.as_slice(), y.as_slice()).unwrap()));
        });
    }
    group.finish();
}

/// Widened (8-bit) versus direct-width sampling
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_uniform");
    let services = MathServices::new();
    let count = 10_000;

    group.bench_function("u8_widened", |b| {
        let stats = services.stats::<u8>();
        b.iter(|| black_box(stats.sample_uniform(count, 0, 200).unwrap()));
    });
    group.bench_function("u16_direct", |b| {
        let stats = services.stats::<u16>();
        b.iter(|| black_box(stats.sample_uniform(count, 0, 200).unwrap()));
    });
    group.bench_function("i64_direct", |b| {
        let stats = services.stats::<i64>();
        b.iter(|| black_box(stats.sample_uniform(count, -200, 200).unwrap()));
    });
    group.finish();
}

criterion_group!(benches, bench_dot_product, bench_multiply, bench_sampling);
criterion_main!(benches);
