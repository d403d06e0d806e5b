use std::collections::{BTreeMap, BTreeSet, VecDeque};

use hull_core::errors::{ErrorInfo, HullError};
use hull_core::{Graph, VertexId};

use crate::flags::GraphConfig;
use crate::ids::{canonical_edge, canonicalize_vertices};

/// Simple graph (no loops, no parallel edges) keyed by [`VertexId`].
///
/// Adjacency stores out-neighbours; undirected edges are stored in both
/// directions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleGraph {
    config: GraphConfig,
    adjacency: BTreeMap<VertexId, BTreeSet<VertexId>>,
    edge_count: usize,
}

impl SimpleGraph {
    /// Creates an empty graph with the provided configuration.
    pub fn new(config: GraphConfig) -> Self {
        Self {
            config,
            adjacency: BTreeMap::new(),
            edge_count: 0,
        }
    }

    /// Creates an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphConfig::undirected())
    }

    /// Creates an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphConfig::directed())
    }

    /// Creates an undirected graph from an edge list, adding endpoints as needed.
    pub fn from_edges(edges: &[(u64, u64)]) -> Result<Self, HullError> {
        let mut graph = Self::undirected();
        for &(u, v) in edges {
            let (u, v) = (VertexId::from_raw(u), VertexId::from_raw(v));
            graph.ensure_vertex(u);
            graph.ensure_vertex(v);
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Returns the configuration used by this graph.
    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Adds a vertex; fails if the label is already present.
    pub fn add_vertex(&mut self, vertex: VertexId) -> Result<(), HullError> {
        if self.adjacency.contains_key(&vertex) {
            return Err(graph_error("duplicate-vertex", "vertex already exists")
                .with_context("vertex", vertex.as_raw()));
        }
        self.adjacency.insert(vertex, BTreeSet::new());
        Ok(())
    }

    /// Adds a vertex if it is not present yet.
    pub fn ensure_vertex(&mut self, vertex: VertexId) {
        self.adjacency.entry(vertex).or_default();
    }

    /// Adds a vertex labelled one past the current largest label.
    pub fn add_next_vertex(&mut self) -> VertexId {
        let next = self
            .adjacency
            .keys()
            .next_back()
            .map(|last| last.as_raw() + 1)
            .unwrap_or(0);
        let vertex = VertexId::from_raw(next);
        self.adjacency.insert(vertex, BTreeSet::new());
        vertex
    }

    /// Adds the edge `u -> v` (and `v -> u` when undirected).
    pub fn add_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), HullError> {
        self.require_vertex(u)?;
        self.require_vertex(v)?;
        if u == v {
            return Err(graph_error("self-loop", "self loops are not allowed")
                .with_context("vertex", u.as_raw()));
        }
        if self.has_edge(u, v) {
            return Err(graph_error("duplicate-edge", "edge already exists")
                .with_context("u", u.as_raw())
                .with_context("v", v.as_raw()));
        }
        self.out_set_mut(u)?.insert(v);
        if !self.config.directed {
            self.out_set_mut(v)?.insert(u);
        }
        self.edge_count += 1;
        Ok(())
    }

    /// Removes the edge `u -> v` (and `v -> u` when undirected).
    pub fn remove_edge(&mut self, u: VertexId, v: VertexId) -> Result<(), HullError> {
        if !self.has_edge(u, v) {
            return Err(graph_error("unknown-edge", "edge does not exist")
                .with_context("u", u.as_raw())
                .with_context("v", v.as_raw()));
        }
        self.out_set_mut(u)?.remove(&v);
        if !self.config.directed {
            self.out_set_mut(v)?.remove(&u);
        }
        self.edge_count -= 1;
        Ok(())
    }

    /// Returns whether the edge `u -> v` exists.
    pub fn has_edge(&self, u: VertexId, v: VertexId) -> bool {
        self.adjacency
            .get(&u)
            .map(|out| out.contains(&v))
            .unwrap_or(false)
    }

    /// Returns whether the vertex exists.
    pub fn has_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Returns the number of edges.
    pub fn size(&self) -> usize {
        self.edge_count
    }

    /// Returns the out-degree of a vertex.
    pub fn degree(&self, vertex: VertexId) -> Result<usize, HullError> {
        Ok(self.out_set(vertex)?.len())
    }

    /// Returns all edges; undirected edges are reported once as `(min, max)`.
    pub fn edges(&self) -> Vec<(VertexId, VertexId)> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (u, out) in &self.adjacency {
            for v in out {
                if self.config.directed || u < v {
                    edges.push((*u, *v));
                }
            }
        }
        edges
    }

    /// Returns the connected components, each sorted, ordered by smallest label.
    ///
    /// Directed graphs report weakly connected components.
    pub fn connected_components(&self) -> Vec<Vec<VertexId>> {
        let mut undirected: BTreeMap<VertexId, BTreeSet<VertexId>> = self
            .adjacency
            .keys()
            .map(|vertex| (*vertex, BTreeSet::new()))
            .collect();
        for (u, v) in self.edges() {
            let (a, b) = canonical_edge(u, v);
            undirected.entry(a).or_default().insert(b);
            undirected.entry(b).or_default().insert(a);
        }

        let mut seen: BTreeSet<VertexId> = BTreeSet::new();
        let mut components = Vec::new();
        for start in self.adjacency.keys() {
            if !seen.insert(*start) {
                continue;
            }
            let mut component = vec![*start];
            let mut queue = VecDeque::from([*start]);
            while let Some(current) = queue.pop_front() {
                for next in &undirected[&current] {
                    if seen.insert(*next) {
                        component.push(*next);
                        queue.push_back(*next);
                    }
                }
            }
            component.sort();
            components.push(component);
        }
        components
    }

    /// Returns whether the graph has at most one connected component.
    pub fn is_connected(&self) -> bool {
        self.connected_components().len() <= 1
    }

    /// Returns the subgraph induced by the given vertices, keeping their labels.
    pub fn induced_subgraph(&self, vertices: &[VertexId]) -> Result<SimpleGraph, HullError> {
        let keep = canonicalize_vertices(vertices);
        let mut subgraph = SimpleGraph::new(self.config.clone());
        for vertex in &keep {
            self.require_vertex(*vertex)?;
            subgraph.add_vertex(*vertex)?;
        }
        for (u, v) in self.edges() {
            if keep.binary_search(&u).is_ok() && keep.binary_search(&v).is_ok() {
                subgraph.add_edge(u, v)?;
            }
        }
        Ok(subgraph)
    }

    fn require_vertex(&self, vertex: VertexId) -> Result<(), HullError> {
        self.out_set(vertex).map(|_| ())
    }

    fn out_set(&self, vertex: VertexId) -> Result<&BTreeSet<VertexId>, HullError> {
        self.adjacency
            .get(&vertex)
            .ok_or_else(|| unknown_vertex(vertex))
    }

    fn out_set_mut(&mut self, vertex: VertexId) -> Result<&mut BTreeSet<VertexId>, HullError> {
        self.adjacency
            .get_mut(&vertex)
            .ok_or_else(|| unknown_vertex(vertex))
    }
}

impl Default for SimpleGraph {
    fn default() -> Self {
        Self::new(GraphConfig::default())
    }
}

impl Graph for SimpleGraph {
    type Vertex = VertexId;

    fn is_directed(&self) -> bool {
        self.config.directed
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn neighbours(&self, vertex: &VertexId) -> Result<Vec<VertexId>, HullError> {
        Ok(self.out_set(*vertex)?.iter().copied().collect())
    }

    fn order(&self) -> usize {
        self.adjacency.len()
    }
}

fn graph_error(code: impl Into<String>, message: impl Into<String>) -> HullError {
    HullError::Graph(ErrorInfo::new(code, message))
}

fn unknown_vertex(vertex: VertexId) -> HullError {
    HullError::UnknownVertex(
        ErrorInfo::new("unknown-vertex", "vertex does not exist")
            .with_context("vertex", vertex.as_raw()),
    )
}
