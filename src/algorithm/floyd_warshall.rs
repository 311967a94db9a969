use std::fmt::Debug;

use log::debug;
use num_traits::{PrimInt, Signed};

use crate::algorithm::AllPairsSolver;
use crate::matrix::DistanceMatrix;
use crate::{Error, Result};

/// Relaxes a flattened n x n distance matrix into all-pairs shortest-path
/// distances, in place.
///
/// `dm` is addressed row-major as `row * n + col` and must hold exactly
/// `n * n` entries; any other length fails with [`Error::InvalidDimension`]
/// before a single entry is written. The caller guarantees the matrix is
/// symmetric with non-negative values, where `0` off the diagonal means "no
/// path known" rather than a zero-length path. Pairs still `0` on return
/// have no path at all. Diagonal entries are never read or written.
///
/// Symmetry is only checked by a debug assertion; release builds keep the
/// garbage-in/garbage-out contract for malformed values. Path weights are
/// accumulated with plain `W` addition, so the caller keeps edge weights
/// small enough that no composed path sum overflows `W`.
pub fn floyd_warshall_in_place<W>(n: usize, dm: &mut [W]) -> Result<()>
where
    W: PrimInt + Signed + Debug,
{
    match n.checked_mul(n) {
        Some(len) if len == dm.len() => {}
        _ => return Err(Error::InvalidDimension { n, len: dm.len() }),
    }
    debug_assert!(
        is_symmetric(n, dm),
        "floyd_warshall_in_place requires a symmetric matrix"
    );

    debug!("relaxing {}x{} distance matrix in place", n, n);

    let zero = W::zero();
    // Each pass extends the invariant "distances are shortest using only
    // pivots 0..=k as intermediates", so pivots must run in ascending order.
    for k in 0..n {
        for j in 0..n {
            if j == k {
                continue;
            }
            // Row k is never written while k is the pivot (updates land in
            // rows i and j, both distinct from k), so d(k, j) can be read
            // once per j. An unknown d(k, j) composes with nothing.
            let d_kj = dm[k * n + j];
            if d_kj <= zero {
                continue;
            }
            // Strict upper triangle only; the mirror cell is written below.
            for i in 0..j {
                if i == k {
                    continue;
                }
                let d_ik = dm[i * n + k];
                if d_ik > zero {
                    let d_new = d_ik + d_kj;
                    let d_orig = dm[i * n + j];
                    if d_orig == zero || d_new < d_orig {
                        dm[i * n + j] = d_new;
                        dm[j * n + i] = d_new;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Classic Floyd-Warshall over a dense symmetric matrix
#[derive(Debug, Default)]
pub struct FloydWarshall;

impl FloydWarshall {
    /// Creates a new FloydWarshall solver instance
    pub fn new() -> Self {
        FloydWarshall
    }
}

impl<W> AllPairsSolver<W> for FloydWarshall
where
    W: PrimInt + Signed + Debug,
{
    fn name(&self) -> &'static str {
        "Floyd-Warshall (dense, in-place)"
    }

    fn solve(&self, matrix: &mut DistanceMatrix<W>) -> Result<()> {
        let n = matrix.node_count();
        floyd_warshall_in_place(n, matrix.as_mut_slice())
    }
}

fn is_symmetric<W>(n: usize, dm: &[W]) -> bool
where
    W: PrimInt + Signed + Debug,
{
    for i in 0..n {
        for j in (i + 1)..n {
            if dm[i * n + j] != dm[j * n + i] {
                return false;
            }
        }
    }
    true
}
