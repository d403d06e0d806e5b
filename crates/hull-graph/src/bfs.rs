use std::collections::{BTreeMap, VecDeque};

use hull_core::errors::{ErrorInfo, HullError};
use hull_core::{DistanceMatrix, DistanceOracle, Graph};

/// Unweighted all-pairs distances by one breadth-first search per source.
///
/// Runs in `O(n * (n + m))`. Pairs in different components keep
/// [`DistanceMatrix::UNREACHABLE`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BfsOracle;

impl DistanceOracle for BfsOracle {
    fn all_pairs_distances<G: Graph>(
        &self,
        graph: &G,
        order: &[G::Vertex],
    ) -> Result<DistanceMatrix, HullError> {
        let n = order.len();
        let index: BTreeMap<&G::Vertex, usize> =
            order.iter().enumerate().map(|(i, v)| (v, i)).collect();
        if index.len() != n {
            return Err(HullError::Graph(ErrorInfo::new(
                "duplicate-vertex",
                "vertex order contains repeated labels",
            )));
        }

        let mut adjacency: Vec<Vec<usize>> = Vec::with_capacity(n);
        for vertex in order {
            let mut row = Vec::new();
            for neighbour in graph.neighbours(vertex)? {
                let position = index.get(&neighbour).copied().ok_or_else(|| {
                    HullError::Graph(
                        ErrorInfo::new(
                            "neighbour-outside-order",
                            "neighbour is missing from the vertex order",
                        )
                        .with_context("vertex", format!("{vertex:?}"))
                        .with_context("neighbour", format!("{neighbour:?}")),
                    )
                })?;
                row.push(position);
            }
            adjacency.push(row);
        }

        let mut distances = DistanceMatrix::unreachable(n);
        let mut queue = VecDeque::with_capacity(n);
        for source in 0..n {
            queue.clear();
            queue.push_back(source);
            while let Some(current) = queue.pop_front() {
                let next_distance = distances.get(source, current) + 1;
                for &next in &adjacency[current] {
                    if !distances.is_reachable(source, next) {
                        distances.set(source, next, next_distance);
                        queue.push_back(next);
                    }
                }
            }
        }
        Ok(distances)
    }
}
