//! Dense APSP - In-place all-pairs shortest paths over symmetric matrices
//!
//! This library computes all-pairs shortest-path distances for dense,
//! symmetric, integer-weighted graphs with a Floyd-Warshall relaxation that
//! mutates a flattened n x n distance matrix in place.
//!
//! The matrix uses a sentinel encoding: a value of `0` at an off-diagonal
//! position means "no path currently known", not a zero-length path. Entries
//! that are still `0` after solving belong to genuinely disconnected pairs.
//! A consequence of the encoding is that true zero-weight edges cannot be
//! represented; callers must keep all meaningful distances at `1` or above.
//!
//! Typical use seeds a [`DistanceMatrix`] with direct edge weights (for
//! example one unit per bond of a molecular graph) and solves it in place:
//!
//! ```
//! use dense_apsp::{AllPairsSolver, DistanceMatrix, FloydWarshall};
//!
//! let mut matrix: DistanceMatrix<i32> = DistanceMatrix::new(3);
//! matrix.set_edge(0, 1, 1);
//! matrix.set_edge(1, 2, 1);
//!
//! FloydWarshall::new().solve(&mut matrix).unwrap();
//! assert_eq!(matrix.get(0, 2), 2);
//! ```

pub mod algorithm;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod matrix;

pub use algorithm::{
    floyd_warshall::{floyd_warshall_in_place, FloydWarshall},
    AllPairsSolver,
};
/// Re-export main types for convenient use
pub use matrix::DistanceMatrix;

/// Error types for the library
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("Buffer of {len} entries does not form a {n}x{n} distance matrix")]
    InvalidDimension { n: usize, len: usize },

    #[error("Invalid edge: from {0} to {1}")]
    InvalidEdge(usize, usize),

    #[error("Negative weight on edge ({0}, {1})")]
    NegativeWeight(usize, usize),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
