//! All-pairs distance contract consumed by the incidence cache.

use serde::{Deserialize, Serialize};

use crate::errors::{ErrorInfo, HullError};
use crate::Graph;

/// Dense `n x n` matrix of hop distances in a fixed vertex ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistanceMatrix {
    order: usize,
    entries: Vec<u32>,
}

impl DistanceMatrix {
    /// Sentinel stored for pairs with no connecting path.
    pub const UNREACHABLE: u32 = u32::MAX;

    /// Creates a matrix with zero diagonal and every other pair unreachable.
    pub fn unreachable(order: usize) -> Self {
        let mut entries = vec![Self::UNREACHABLE; order * order];
        for i in 0..order {
            entries[i * order + i] = 0;
        }
        Self { order, entries }
    }

    /// Builds a matrix from explicit rows, validating shape and diagonal.
    pub fn from_rows(rows: Vec<Vec<u32>>) -> Result<Self, HullError> {
        let order = rows.len();
        let mut entries = Vec::with_capacity(order * order);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != order {
                return Err(HullError::Graph(
                    ErrorInfo::new("distance-matrix-shape", "distance matrix must be square")
                        .with_context("row", i)
                        .with_context("expected", order)
                        .with_context("found", row.len()),
                ));
            }
            if row[i] != 0 {
                return Err(HullError::Graph(
                    ErrorInfo::new("distance-matrix-diagonal", "diagonal entries must be zero")
                        .with_context("row", i)
                        .with_context("found", row[i]),
                ));
            }
            entries.extend(row);
        }
        Ok(Self { order, entries })
    }

    /// Returns the number of rows (and columns).
    pub fn order(&self) -> usize {
        self.order
    }

    /// Returns the distance between the vertices at indices `i` and `j`.
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.entries[i * self.order + j]
    }

    /// Overwrites the distance between the vertices at indices `i` and `j`.
    pub fn set(&mut self, i: usize, j: usize, distance: u32) {
        self.entries[i * self.order + j] = distance;
    }

    /// Returns whether the pair is connected by some path.
    pub fn is_reachable(&self, i: usize, j: usize) -> bool {
        self.get(i, j) != Self::UNREACHABLE
    }
}

/// Black-box provider of all-pairs shortest path distances.
pub trait DistanceOracle {
    /// Returns distances indexed by position in `order`.
    ///
    /// Row and column `i` of the result correspond to `order[i]`. The diagonal
    /// is zero and unreachable pairs hold [`DistanceMatrix::UNREACHABLE`].
    fn all_pairs_distances<G: Graph>(
        &self,
        graph: &G,
        order: &[G::Vertex],
    ) -> Result<DistanceMatrix, HullError>;
}
