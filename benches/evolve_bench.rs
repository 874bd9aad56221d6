//! Criterion benchmarks for the knapsack and routing solvers.
//!
//! Instances are generated from a fixed seed so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::Rng;
use u_evolve::ga::GaConfig;
use u_evolve::knapsack::{solve_selection, Item};
use u_evolve::random::create_rng;
use u_evolve::routing::solve_routing;

fn random_items(n: usize) -> Vec<Item> {
    let mut rng = create_rng(7);
    (0..n)
        .map(|i| {
            Item::new(
                format!("item{i}"),
                rng.random_range(1.0..20.0),
                rng.random_range(1.0..50.0),
            )
        })
        .collect()
}

/// Random points in the unit square, Euclidean distances.
fn random_cities(n: usize) -> Vec<Vec<f64>> {
    let mut rng = create_rng(11);
    let points: Vec<(f64, f64)> = (0..n)
        .map(|_| (rng.random_range(0.0..1.0), rng.random_range(0.0..1.0)))
        .collect();
    points
        .iter()
        .map(|&(x1, y1)| {
            points
                .iter()
                .map(|&(x2, y2)| ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt())
                .collect()
        })
        .collect()
}

fn bench_knapsack(c: &mut Criterion) {
    let mut group = c.benchmark_group("knapsack");
    group.sample_size(10);

    for &n in &[20usize, 50, 100] {
        let items = random_items(n);
        let capacity = items.iter().map(|it| it.weight).sum::<f64>() / 3.0;
        let config = GaConfig::knapsack().with_seed(42);
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| {
                let report = solve_selection(black_box(items.clone()), capacity, &config);
                black_box(report)
            })
        });
    }
    group.finish();
}

fn bench_routing(c: &mut Criterion) {
    let mut group = c.benchmark_group("routing");
    group.sample_size(10);

    for (n, pop, gen) in [(10usize, 50usize, 100usize), (30, 100, 100), (60, 100, 50)] {
        let matrix = random_cities(n);
        let config = GaConfig::routing()
            .with_population_size(pop)
            .with_generations(gen)
            .with_seed(42);
        group.bench_with_input(
            BenchmarkId::new(format!("n{}_p{}_g{}", n, pop, gen), n),
            &matrix,
            |b, m| {
                b.iter(|| {
                    let report = solve_routing(black_box(m.clone()), &config);
                    black_box(report)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_knapsack, bench_routing);
criterion_main!(benches);
