//! Benchmarks for normalization, reduction, and basis construction.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cyclos::prelude::*;

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("normalize");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for n in [60, 210, 1155, 2310] {
        let dense: Cyclotomic<Rational> = Cyclotomic::from_coeffs(
            n,
            (0..n).map(|_| Rational::from(rng.gen_range(-20i64..20))),
        );

        group.bench_with_input(BenchmarkId::new("dense_full", n), &n, |bench, _| {
            bench.iter(|| black_box(dense.normalized()));
        });

        let embedded = Cyclotomic::<Rational>::zeta(n / 2).embed(n);
        group.bench_with_input(BenchmarkId::new("reduce_embedded_root", n), &n, |bench, _| {
            bench.iter(|| black_box(embedded.reduce_to_minimal_conductor()));
        });
    }

    group.finish();
}

fn bench_basis(c: &mut Criterion) {
    let mut group = c.benchmark_group("basis_construction");

    for n in [210, 2310, 30030] {
        group.bench_with_input(BenchmarkId::new("uncached", n), &n, |bench, &n| {
            bench.iter(|| black_box(Basis::new(n)));
        });
    }

    group.bench_function("cached_lookup", |bench| {
        let cache = BasisCache::new();
        let _ = cache.get(2310);
        bench.iter(|| black_box(cache.get(2310)));
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_basis);
criterion_main!(benches);
