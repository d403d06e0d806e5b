#![deny(missing_docs)]
#![doc = "Core traits and data types shared by the graph convexity crates."]

use std::fmt::Debug;
use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod backend;
pub mod distance;
pub mod errors;
pub mod rng;
pub mod schema;

pub use backend::{ObjectiveSense, OptimizationBackend};
pub use distance::{DistanceMatrix, DistanceOracle};
pub use errors::{ErrorInfo, HullError};
pub use rng::RngHandle;
pub use schema::SchemaVersion;

/// Label of a vertex within a concrete graph implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub fn as_raw(&self) -> u64 {
        self.0
    }
}

impl From<u64> for VertexId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

/// Read-only view of a simple graph with an enumerable, orderable vertex set.
///
/// Convexity computations bind to a snapshot of the graph taken at
/// construction. Implementations must keep `vertices` deterministic so that
/// the dense index assigned to each label is stable.
pub trait Graph {
    /// Vertex label type.
    type Vertex: Clone + Ord + Debug;

    /// Returns whether edges are oriented.
    fn is_directed(&self) -> bool;

    /// Returns an iterator over all vertex labels in canonical order.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = Self::Vertex> + '_>;

    /// Returns the neighbours of a vertex (out-neighbours for directed graphs).
    fn neighbours(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Vertex>, HullError>;

    /// Returns the number of vertices.
    fn order(&self) -> usize {
        self.vertices().len()
    }
}

impl<G: Graph + ?Sized> Graph for &G {
    type Vertex = G::Vertex;

    fn is_directed(&self) -> bool {
        (**self).is_directed()
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = Self::Vertex> + '_> {
        (**self).vertices()
    }

    fn neighbours(&self, vertex: &Self::Vertex) -> Result<Vec<Self::Vertex>, HullError> {
        (**self).neighbours(vertex)
    }

    fn order(&self) -> usize {
        (**self).order()
    }
}
