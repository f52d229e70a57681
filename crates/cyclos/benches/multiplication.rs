//! Benchmarks for cyclotomic multiplication.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use cyclos::prelude::*;

/// Generates a number with `terms` random small coefficients.
fn random_cyclotomic<S: CoeffStore<Rational>>(
    rng: &mut ChaCha8Rng,
    n: usize,
    terms: usize,
) -> Cyclotomic<Rational, S> {
    let n_exp = i64::try_from(n).unwrap();
    Cyclotomic::from_terms(
        n,
        (0..terms).map(|_| (rng.gen_range(0..n_exp), Rational::from(rng.gen_range(-50i64..50)))),
    )
}

fn bench_dense_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclotomic_mul_dense");
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for n in [12, 60, 210, 840] {
        let a: Cyclotomic<Rational> = random_cyclotomic(&mut rng, n, n / 2);
        let b: Cyclotomic<Rational> = random_cyclotomic(&mut rng, n, n / 2);

        group.bench_with_input(BenchmarkId::new("fresh", n), &n, |bench, _| {
            bench.iter(|| black_box(&a * &b));
        });

        let mut workspace = Workspace::new();
        group.bench_with_input(BenchmarkId::new("workspace", n), &n, |bench, _| {
            bench.iter(|| black_box(a.mul_with(&b, &mut workspace)));
        });
    }

    group.finish();
}

fn bench_sparse_multiplication(c: &mut Criterion) {
    let mut group = c.benchmark_group("cyclotomic_mul_sparse");
    let mut rng = ChaCha8Rng::seed_from_u64(7);

    for n in [210, 840, 2520] {
        let a: SparseCyclotomic<Rational> = random_cyclotomic(&mut rng, n, 8);
        let b: SparseCyclotomic<Rational> = random_cyclotomic(&mut rng, n, 8);

        group.bench_with_input(BenchmarkId::new("8_terms", n), &n, |bench, _| {
            bench.iter(|| black_box(&a * &b));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_dense_multiplication, bench_sparse_multiplication);
criterion_main!(benches);
