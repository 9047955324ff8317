//! Benchmarks for regsearch-model fitting and search.
#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use ndarray::{Array1, Array2};
use rand::Rng;
use regsearch_model::{
    FitMethod, PrincipalComponents, SearchConfig, ordinary_least_squares, search, with_intercept,
};
use regsearch_primitives::Dataset;

/// Variables sharing a common driver, with `y` loading on every one of them.
fn random_dataset(n_obs: usize, n_vars: usize) -> Dataset {
    let mut rng = rand::thread_rng();
    let driver: Vec<f64> = (0..n_obs).map(|_| rng.r#gen::<f64>() * 10.0).collect();
    let x = Array2::from_shape_fn((n_obs, n_vars), |(i, _)| driver[i] + rng.r#gen::<f64>() - 0.5);
    let y = Array1::from_shape_fn(n_obs, |i| 1.0 + x.row(i).sum() + rng.r#gen::<f64>() - 0.5);
    Dataset::new(x, y, -999.0, -999.0).unwrap()
}

fn bench_ordinary_least_squares(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordinary_least_squares");

    for n_obs in [50, 200, 1000] {
        group.throughput(Throughput::Elements(n_obs as u64));
        group.bench_with_input(BenchmarkId::new("n_obs", n_obs), &n_obs, |b, &n_obs| {
            let data = random_dataset(n_obs, 5);
            let design = with_intercept(data.independent());
            b.iter(|| ordinary_least_squares(black_box(&design), black_box(data.dependent())).unwrap());
        });
    }

    group.finish();
}

fn bench_principal_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("principal_components");

    for n_vars in [2, 4, 8, 12] {
        group.bench_with_input(BenchmarkId::new("n_vars", n_vars), &n_vars, |b, &n_vars| {
            let data = random_dataset(200, n_vars);
            b.iter(|| PrincipalComponents::fit(black_box(data.independent())).unwrap());
        });
    }

    group.finish();
}

fn bench_search_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_scaling");
    group.sample_size(20);

    for n_vars in [3, 5, 8, 10] {
        group.bench_with_input(BenchmarkId::new("n_vars", n_vars), &n_vars, |b, &n_vars| {
            let data = random_dataset(100, n_vars);
            b.iter(|| search(black_box(&data), SearchConfig::default()).unwrap());
        });
    }

    group.finish();
}

fn bench_search_method(c: &mut Criterion) {
    let mut group = c.benchmark_group("search_method");
    group.sample_size(20);

    let data = random_dataset(100, 6);
    for (name, method) in
        [("components", FitMethod::PrincipalComponents), ("direct", FitMethod::OrdinaryLeastSquares)]
    {
        group.bench_function(name, |b| {
            let config = SearchConfig { method, ..SearchConfig::default() };
            b.iter(|| search(black_box(&data), config.clone()).unwrap());
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_ordinary_least_squares,
    bench_principal_components,
    bench_search_scaling,
    bench_search_method
);
criterion_main!(benches);
