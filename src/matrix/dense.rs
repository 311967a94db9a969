use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::{Error, Result};

/// A dense, symmetric pairwise distance matrix with a sentinel encoding.
///
/// Storage is a single contiguous row-major buffer of `n * n` signed
/// integers, addressed as `row * n + col`. An off-diagonal value of `0`
/// means "no path currently known between these nodes", not a zero-length
/// path; a positive value is a known distance. Diagonal entries represent
/// zero self-distance by convention and are never touched by the solvers.
///
/// The matrix is expected to stay symmetric: every mutator in this type
/// writes both triangle cells, and [`DistanceMatrix::is_symmetric`] lets
/// callers check buffers they assembled themselves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Number of nodes (the matrix is n x n)
    n: usize,

    /// Flattened row-major values, `values[row * n + col]`
    values: Vec<W>,
}

impl<W> DistanceMatrix<W>
where
    W: PrimInt + Signed + Debug,
{
    /// Creates an n x n matrix with every pair unknown (all zeros)
    pub fn new(n: usize) -> Self {
        DistanceMatrix {
            n,
            values: vec![W::zero(); n * n],
        }
    }

    /// Wraps an existing flattened buffer, validating its length
    pub fn from_flat(n: usize, values: Vec<W>) -> Result<Self> {
        match n.checked_mul(n) {
            Some(len) if len == values.len() => Ok(DistanceMatrix { n, values }),
            _ => Err(Error::InvalidDimension {
                n,
                len: values.len(),
            }),
        }
    }

    /// Builds a matrix seeded with the given direct edge weights
    ///
    /// Each `(i, j, w)` entry is applied via [`DistanceMatrix::set_edge`];
    /// self-edges and out-of-range endpoints fail with
    /// [`Error::InvalidEdge`], negative weights with
    /// [`Error::NegativeWeight`].
    pub fn from_edges(n: usize, edges: &[(usize, usize, W)]) -> Result<Self> {
        let mut matrix = DistanceMatrix::new(n);
        for &(i, j, w) in edges {
            if w < W::zero() {
                return Err(Error::NegativeWeight(i, j));
            }
            if !matrix.set_edge(i, j, w) {
                return Err(Error::InvalidEdge(i, j));
            }
        }
        Ok(matrix)
    }

    /// Returns the number of nodes
    pub fn node_count(&self) -> usize {
        self.n
    }

    /// Returns the stored value at (row, col)
    ///
    /// The stored value keeps the raw encoding: `0` off the diagonal means
    /// "unknown". Panics if either index is out of range; both indices are
    /// checked, so an oversized column can never alias a later row.
    pub fn get(&self, row: usize, col: usize) -> W {
        self.values[self.index_of(row, col)]
    }

    /// Returns the distance between two nodes, decoding the sentinel
    ///
    /// `None` means no path is known; the diagonal reads as
    /// `Some(W::zero())` (zero self-distance by convention). Panics if
    /// either index is out of range.
    pub fn distance(&self, row: usize, col: usize) -> Option<W> {
        let value = self.get(row, col);
        if row == col {
            Some(W::zero())
        } else if value > W::zero() {
            Some(value)
        } else {
            None
        }
    }

    /// Sets the direct distance between two distinct nodes
    ///
    /// Writes both (i, j) and (j, i) so the symmetry invariant holds.
    /// A weight of zero clears the pair back to "unknown". Returns false
    /// without writing anything for self-edges, out-of-range endpoints, or
    /// negative weights.
    pub fn set_edge(&mut self, i: usize, j: usize, weight: W) -> bool {
        if i == j || i >= self.n || j >= self.n || weight < W::zero() {
            return false;
        }

        self.values[i * self.n + j] = weight;
        self.values[j * self.n + i] = weight;
        true
    }

    /// Returns true if the stored buffer is symmetric
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.n {
            for j in (i + 1)..self.n {
                if self.values[i * self.n + j] != self.values[j * self.n + i] {
                    return false;
                }
            }
        }
        true
    }

    /// Iterates over the known pairs of the strict upper triangle
    ///
    /// Yields `(i, j, w)` with `i < j` for every pair whose stored value is
    /// positive. Before solving these are the direct edges; afterwards,
    /// every connected pair.
    pub fn known_pairs(&self) -> impl Iterator<Item = (usize, usize, W)> + '_ {
        let n = self.n;
        (0..n).flat_map(move |i| {
            ((i + 1)..n).filter_map(move |j| {
                let w = self.values[i * n + j];
                if w > W::zero() {
                    Some((i, j, w))
                } else {
                    None
                }
            })
        })
    }

    /// Exposes the flattened row-major buffer
    pub fn as_slice(&self) -> &[W] {
        &self.values
    }

    /// Exposes the flattened row-major buffer mutably
    ///
    /// Callers writing through this are responsible for keeping the matrix
    /// symmetric and non-negative.
    pub fn as_mut_slice(&mut self) -> &mut [W] {
        &mut self.values
    }

    /// Consumes the matrix and returns the flattened buffer
    pub fn into_flat(self) -> Vec<W> {
        self.values
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.n && col < self.n,
            "index ({}, {}) out of range for {} nodes",
            row,
            col,
            self.n
        );
        row * self.n + col
    }
}
