use std::fmt::Debug;

use hull_core::errors::{ErrorInfo, HullError};
use hull_core::{DistanceOracle, Graph, OptimizationBackend};
use hull_graph::BfsOracle;
use hull_ip::BinaryProgram;
use serde::{Deserialize, Serialize};

use crate::cache::PairIncidenceCache;
use crate::closure::ClosureEngine;
use crate::config::SolverConfig;
use crate::index::VertexIndexer;
use crate::snapshot::structural_digest;
use crate::solver::HullNumberSolver;

/// Answer of [`ConvexityProperties::hull_number`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum HullNumber<V> {
    /// Only the cardinality was requested.
    Value(usize),
    /// A minimum generating set, in vertex order.
    Generators(Vec<V>),
}

impl<V> HullNumber<V> {
    /// Cardinality of the minimum generating set.
    pub fn value(&self) -> usize {
        match self {
            HullNumber::Value(value) => *value,
            HullNumber::Generators(generators) => generators.len(),
        }
    }
}

/// Full result of [`ConvexityProperties::hull_number_with`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HullNumberReport<V> {
    /// The hull number.
    pub value: usize,
    /// A minimum generating set, in vertex order.
    pub generators: Vec<V>,
    /// Number of constraint-generation rounds.
    pub iterations: usize,
    /// Proper convex sets behind each generated constraint, when recorded.
    pub constraints: Vec<Vec<V>>,
}

/// Geodesic convexity queries on a fixed undirected graph.
///
/// Construction computes all-pairs distances once and keeps only the
/// shortest-path incidence of every vertex pair. The instance is bound to the
/// graph as it was at construction; mutating the graph afterwards silently
/// invalidates every answer. [`ConvexityProperties::matches_snapshot`] can be
/// used to check a graph against the recorded structure.
///
/// Disconnected graphs are accepted but hulls never cross components;
/// callers are expected to work per connected component.
#[derive(Debug, Clone)]
pub struct ConvexityProperties<V> {
    indexer: VertexIndexer<V>,
    cache: PairIncidenceCache,
    digest: String,
}

impl<V: Clone + Ord + Debug> ConvexityProperties<V> {
    /// Builds the cache using breadth-first search distances.
    pub fn new<G: Graph<Vertex = V>>(graph: &G) -> Result<Self, HullError> {
        Self::with_oracle(graph, &BfsOracle)
    }

    /// Builds the cache from the distances reported by `oracle`.
    pub fn with_oracle<G, O>(graph: &G, oracle: &O) -> Result<Self, HullError>
    where
        G: Graph<Vertex = V>,
        O: DistanceOracle,
    {
        if graph.is_directed() {
            return Err(HullError::UnsupportedGraphKind(
                ErrorInfo::new("directed-graph", "convexity is only defined for undirected graphs")
                    .with_context("order", graph.order()),
            ));
        }
        let indexer = VertexIndexer::from_graph(graph)?;
        let order = indexer.len();
        let distances = oracle.all_pairs_distances(graph, indexer.labels())?;
        if distances.order() != order {
            return Err(HullError::Graph(
                ErrorInfo::new(
                    "distance-matrix-shape",
                    "oracle returned a matrix of the wrong order",
                )
                .with_context("expected", order)
                .with_context("found", distances.order()),
            ));
        }
        let cache = PairIncidenceCache::build(&distances);
        drop(distances);
        let digest = structural_digest(graph, &indexer)?;
        tracing::debug!(order, pairs = cache.len(), "pair incidence cache built");
        Ok(Self {
            indexer,
            cache,
            digest,
        })
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.indexer.len()
    }

    /// Vertex labels in index order.
    pub fn vertices(&self) -> &[V] {
        self.indexer.labels()
    }

    /// The label/index bijection.
    pub fn indexer(&self) -> &VertexIndexer<V> {
        &self.indexer
    }

    /// The shortest-path incidence cache.
    pub fn cache(&self) -> &PairIncidenceCache {
        &self.cache
    }

    /// Closure engine reading from this instance's cache.
    pub fn engine(&self) -> ClosureEngine<'_> {
        ClosureEngine::new(&self.cache)
    }

    /// Convex hull of `vertices`, in vertex order.
    pub fn hull(&self, vertices: &[V]) -> Result<Vec<V>, HullError> {
        let mut set = self.indexer.to_bitset(vertices)?;
        self.engine().closure(&mut set);
        Ok(self.indexer.to_labels(&set))
    }

    /// Returns whether `vertices` already equals its hull.
    pub fn is_convex(&self, vertices: &[V]) -> Result<bool, HullError> {
        let set = self.indexer.to_bitset(vertices)?;
        Ok(self.engine().is_convex(&set))
    }

    /// Vertices on some shortest `u`-`v` path, in vertex order.
    pub fn geodesic_interval(&self, u: &V, v: &V) -> Result<Vec<V>, HullError> {
        let i = self.indexer.index_of(u)?;
        let j = self.indexer.index_of(v)?;
        if i == j {
            return Ok(vec![u.clone()]);
        }
        Ok(self.indexer.to_labels(self.cache.interval(i, j)))
    }

    /// Hull number, or a minimum generating set when `value_only` is false.
    ///
    /// Uses the bundled branch-and-bound backend. With `verbose`, each
    /// generated constraint is reported as an `info` event.
    pub fn hull_number(&self, value_only: bool, verbose: bool) -> Result<HullNumber<V>, HullError> {
        let config = SolverConfig {
            verbose,
            ..SolverConfig::default()
        };
        let mut backend = BinaryProgram::default();
        let report = self.hull_number_with(&mut backend, &config)?;
        Ok(if value_only {
            HullNumber::Value(report.value)
        } else {
            HullNumber::Generators(report.generators)
        })
    }

    /// Runs the cutting-plane loop against any backend.
    pub fn hull_number_with<B: OptimizationBackend>(
        &self,
        backend: &mut B,
        config: &SolverConfig,
    ) -> Result<HullNumberReport<V>, HullError> {
        let solver = HullNumberSolver::new(&self.cache, &self.indexer, config);
        let outcome = solver.solve(backend)?;
        Ok(HullNumberReport {
            value: outcome.generators.count(),
            generators: self.indexer.to_labels(&outcome.generators),
            iterations: outcome.iterations,
            constraints: outcome
                .constraints
                .iter()
                .map(|set| self.indexer.to_labels(set))
                .collect(),
        })
    }

    /// SHA-256 digest of the graph structure recorded at construction.
    pub fn snapshot_digest(&self) -> &str {
        &self.digest
    }

    /// Returns whether `graph` still has the structure recorded at construction.
    pub fn matches_snapshot<G: Graph<Vertex = V>>(&self, graph: &G) -> Result<bool, HullError> {
        let current = VertexIndexer::from_graph(graph)?;
        if current.labels() != self.indexer.labels() {
            return Ok(false);
        }
        Ok(structural_digest(graph, &current)? == self.digest)
    }
}
