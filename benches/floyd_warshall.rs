use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use dense_apsp::matrix::generators::{generate_chain, generate_sparse_symmetric_with_rng};
use dense_apsp::{AllPairsSolver, FloydWarshall};
use rand::rngs::StdRng;
use rand::SeedableRng;

// The solver mutates its input, so every iteration gets a fresh clone via
// iter_batched.
fn bench_solve(c: &mut Criterion) {
    let solver = FloydWarshall::new();
    let mut rng = StdRng::seed_from_u64(7);
    let mut group = c.benchmark_group("floyd_warshall");

    for n in [32usize, 64, 128] {
        let chain = generate_chain(n, 1);
        group.bench_with_input(BenchmarkId::new("chain", n), &chain, |b, matrix| {
            b.iter_batched(
                || matrix.clone(),
                |mut working| {
                    solver.solve(&mut working).unwrap();
                    working
                },
                BatchSize::SmallInput,
            )
        });

        let sparse = generate_sparse_symmetric_with_rng(n, 4.0, 10, &mut rng);
        group.bench_with_input(BenchmarkId::new("sparse", n), &sparse, |b, matrix| {
            b.iter_batched(
                || matrix.clone(),
                |mut working| {
                    solver.solve(&mut working).unwrap();
                    working
                },
                BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
