use std::collections::BTreeMap;
use std::fmt::Debug;

use hull_core::errors::{ErrorInfo, HullError};
use hull_core::Graph;

use crate::bitset::Bitset;

/// Bijection between vertex labels and dense indices `0..n`.
///
/// Index `i` is the position of the label in the graph's canonical vertex
/// order at the time the indexer was built.
#[derive(Debug, Clone)]
pub struct VertexIndexer<V> {
    labels: Vec<V>,
    positions: BTreeMap<V, usize>,
}

impl<V: Clone + Ord + Debug> VertexIndexer<V> {
    /// Snapshots the vertex order of a graph.
    pub fn from_graph<G: Graph<Vertex = V>>(graph: &G) -> Result<Self, HullError> {
        Self::from_labels(graph.vertices().collect())
    }

    /// Builds the bijection from an explicit label order.
    pub fn from_labels(labels: Vec<V>) -> Result<Self, HullError> {
        let mut positions = BTreeMap::new();
        for (index, label) in labels.iter().enumerate() {
            if positions.insert(label.clone(), index).is_some() {
                return Err(HullError::Graph(
                    ErrorInfo::new("duplicate-vertex", "vertex labels must be distinct")
                        .with_context("vertex", format!("{label:?}")),
                ));
            }
        }
        Ok(Self { labels, positions })
    }

    /// Number of vertices.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Returns whether there are no vertices.
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in index order.
    pub fn labels(&self) -> &[V] {
        &self.labels
    }

    /// Returns the label stored at `index`.
    pub fn label(&self, index: usize) -> &V {
        &self.labels[index]
    }

    /// Returns the dense index of a label.
    pub fn index_of(&self, label: &V) -> Result<usize, HullError> {
        self.positions.get(label).copied().ok_or_else(|| {
            HullError::UnknownVertex(
                ErrorInfo::new("unknown-vertex", "vertex is not part of the graph")
                    .with_context("vertex", format!("{label:?}")),
            )
        })
    }

    /// Converts labels into a bitset, ignoring duplicates.
    pub fn to_bitset(&self, labels: &[V]) -> Result<Bitset, HullError> {
        let mut set = Bitset::new(self.len());
        for label in labels {
            set.insert(self.index_of(label)?);
        }
        Ok(set)
    }

    /// Converts a bitset back into labels in increasing index order.
    pub fn to_labels(&self, set: &Bitset) -> Vec<V> {
        set.iter().map(|index| self.labels[index].clone()).collect()
    }
}
