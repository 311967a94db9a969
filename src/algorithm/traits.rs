use num_traits::{PrimInt, Signed};
use std::fmt::Debug;

use crate::matrix::DistanceMatrix;
use crate::Result;

/// Trait for all-pairs shortest path solvers over dense symmetric matrices
pub trait AllPairsSolver<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Relaxes the matrix into all-pairs shortest-path distances, in place
    ///
    /// On return every pair holds its minimum composed distance, or the `0`
    /// sentinel when no path exists. Symmetry is preserved.
    fn solve(&self, matrix: &mut DistanceMatrix<W>) -> Result<()>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Solves a copy of the matrix, leaving the input untouched
    fn solve_copy(&self, matrix: &DistanceMatrix<W>) -> Result<DistanceMatrix<W>> {
        let mut solved = matrix.clone();
        self.solve(&mut solved)?;
        Ok(solved)
    }
}
