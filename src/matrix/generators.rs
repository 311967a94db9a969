use crate::matrix::DistanceMatrix;
use rand::prelude::*;

/// Generates a chain 0-1-...-(n-1) with a uniform weight per step
///
/// The solved matrix has distance `|i - j| * weight` for every pair, which
/// makes chains a convenient fixture with known answers.
pub fn generate_chain(n: usize, weight: i32) -> DistanceMatrix<i32> {
    assert!(weight > 0, "weight must be positive");

    let mut matrix = DistanceMatrix::new(n);
    for i in 1..n {
        matrix.set_edge(i - 1, i, weight);
    }

    matrix
}

/// Generates a ring 0-1-...-(n-1)-0 with a uniform weight per step
///
/// The worst pair distance after solving is `(n / 2) * weight`.
pub fn generate_ring(n: usize, weight: i32) -> DistanceMatrix<i32> {
    assert!(weight > 0, "weight must be positive");

    let mut matrix = generate_chain(n, weight);
    if n > 2 {
        matrix.set_edge(n - 1, 0, weight);
    }

    matrix
}

/// Generates a random sparse symmetric matrix
///
/// Each unordered pair becomes a direct edge with probability
/// `avg_degree / (n - 1)`, giving roughly `avg_degree` neighbors per node.
/// Weights are drawn uniformly from `1..=max_weight`.
pub fn generate_sparse_symmetric(n: usize, avg_degree: f64, max_weight: i32) -> DistanceMatrix<i32> {
    let mut rng = rand::thread_rng();
    generate_sparse_symmetric_with_rng(n, avg_degree, max_weight, &mut rng)
}

/// Generates a random sparse symmetric matrix from a caller-supplied RNG
///
/// Seeded RNGs make instances reproducible in tests and benchmarks.
pub fn generate_sparse_symmetric_with_rng<R: Rng>(
    n: usize,
    avg_degree: f64,
    max_weight: i32,
    rng: &mut R,
) -> DistanceMatrix<i32> {
    assert!(avg_degree >= 0.0, "avg_degree must be non-negative");
    assert!(max_weight > 0, "max_weight must be positive");

    let mut matrix = DistanceMatrix::new(n);
    if n < 2 {
        return matrix;
    }

    let p = (avg_degree / (n - 1) as f64).clamp(0.0, 1.0);
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.gen_bool(p) {
                let weight = rng.gen_range(1..=max_weight);
                matrix.set_edge(i, j, weight);
            }
        }
    }

    matrix
}
