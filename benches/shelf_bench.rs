//! Criterion benchmarks for the shelf placement engines.
//!
//! Uses synthetic catalogs with demand spread over all bands to measure
//! scoring and search cost at several catalog sizes.

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use shelf_metaheur::fitness::evaluate;
use shelf_metaheur::harmony::{HarmonyConfig, HarmonyRunner};
use shelf_metaheur::placement::{Placement, Product};
use shelf_metaheur::random::create_rng;
use shelf_metaheur::tabu::{TabuConfig, TabuRunner};

fn catalog(n: u64) -> Vec<Arc<Product>> {
    (1..=n)
        .map(|id| {
            let demand = (id * 37 % 100) as f64;
            Arc::new(Product::new(id, format!("ITEM{id} GENERIC"), 250, demand))
        })
        .collect()
}

fn bench_evaluate(c: &mut Criterion) {
    let mut group = c.benchmark_group("evaluate");

    for &n in &[20u64, 85, 500] {
        let products = catalog(n);
        let mut rng = create_rng(42);
        let placement = Placement::random(&products, &mut rng);
        group.bench_with_input(BenchmarkId::from_parameter(n), &placement, |b, p| {
            b.iter(|| black_box(evaluate(black_box(p))))
        });
    }
    group.finish();
}

fn bench_harmony(c: &mut Criterion) {
    let mut group = c.benchmark_group("harmony");
    group.sample_size(10);

    for &n in &[20u64, 85, 200] {
        let products = catalog(n);
        let config = HarmonyConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(products, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = HarmonyRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_tabu(c: &mut Criterion) {
    let mut group = c.benchmark_group("tabu");
    group.sample_size(10);

    for &n in &[20u64, 85, 200] {
        let products = catalog(n);
        let config = TabuConfig::default().with_seed(42);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(products, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = TabuRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_evaluate, bench_harmony, bench_tabu);
criterion_main!(benches);
