//! Criterion benchmarks for the planning strategies.
//!
//! Uses a synthetic catalog with a spread of ratings and prices so the
//! numbers reflect algorithm overhead rather than data quirks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use stay_planner::aco::{AcoConfig, AcoRunner};
use stay_planner::graph::GraphSearch;
use stay_planner::model::Lodging;
use stay_planner::planner::PlanRequest;
use stay_planner::pso::{PsoConfig, PsoRunner};

fn synthetic_catalog(n: usize) -> Vec<Lodging> {
    (0..n)
        .map(|i| {
            let stars = 1 + (i % 5) as u32;
            let price = 40.0 + 25.0 * stars as f64 + (i * 7 % 30) as f64;
            Lodging::new(format!("Hotel {i}"), stars, price, "Bench")
        })
        .collect()
}

fn bench_exhaustive(c: &mut Criterion) {
    let mut group = c.benchmark_group("exhaustive");
    group.sample_size(10);

    let lodgings = synthetic_catalog(6);
    for &nights in &[2usize, 3, 4] {
        let request = PlanRequest::new("Bench", nights, 120.0 * nights as f64);
        group.bench_with_input(BenchmarkId::from_parameter(nights), &request, |b, r| {
            b.iter(|| black_box(GraphSearch::run(black_box(&lodgings), r)))
        });
    }
    group.finish();
}

fn bench_aco(c: &mut Criterion) {
    let mut group = c.benchmark_group("aco");
    group.sample_size(10);

    for (options, nights) in [(10usize, 5usize), (30, 7), (60, 10)] {
        let lodgings = synthetic_catalog(options);
        let request = PlanRequest::new("Bench", nights, 110.0 * nights as f64);
        let config = AcoConfig::default()
            .with_ants(20)
            .with_iterations(50)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("o{options}_n{nights}"), options),
            &(request, config),
            |b, (r, c)| b.iter(|| black_box(AcoRunner::run(black_box(&lodgings), r, c))),
        );
    }
    group.finish();
}

fn bench_pso(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso");
    group.sample_size(10);

    for (options, nights) in [(10usize, 5usize), (30, 7), (60, 10)] {
        let lodgings = synthetic_catalog(options);
        let request = PlanRequest::new("Bench", nights, 110.0 * nights as f64);
        let config = PsoConfig::default()
            .with_particles(20)
            .with_iterations(50)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("o{options}_n{nights}"), options),
            &(request, config),
            |b, (r, c)| b.iter(|| black_box(PsoRunner::run(black_box(&lodgings), r, c))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_exhaustive, bench_aco, bench_pso);
criterion_main!(benches);
