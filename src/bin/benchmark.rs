use std::time::Instant;

use dense_apsp::matrix::generators::{generate_chain, generate_ring, generate_sparse_symmetric};
use dense_apsp::{AllPairsSolver, DistanceMatrix, FloydWarshall};

// Solves a copy of the instance and reports wall-clock time plus how many
// pairs ended up connected.
fn benchmark_instance(label: &str, matrix: &DistanceMatrix<i32>) {
    let solver = FloydWarshall::new();
    let mut working = matrix.clone();

    let start = Instant::now();
    solver.solve(&mut working).unwrap();
    let duration = start.elapsed();

    let known = working.known_pairs().count();
    println!("  {:<20} {:>10} known pairs   {:?}", label, known, duration);
}

fn main() {
    env_logger::init();

    let solver = FloydWarshall::new();
    println!(
        "Benchmarking {}",
        <FloydWarshall as AllPairsSolver<i32>>::name(&solver)
    );

    let sizes = vec![64, 128, 256, 512];

    for n in sizes {
        println!("--- n = {} ({} entries) ---", n, n * n);

        benchmark_instance("chain", &generate_chain(n, 1));
        benchmark_instance("ring", &generate_ring(n, 1));
        benchmark_instance("sparse, avg deg 4", &generate_sparse_symmetric(n, 4.0, 10));
        benchmark_instance("sparse, avg deg 16", &generate_sparse_symmetric(n, 16.0, 10));
    }
}
