use hull_core::errors::{ErrorInfo, HullError};
use hull_core::{Graph, SchemaVersion, VertexId};
use serde::{Deserialize, Serialize};

use crate::flags::GraphConfig;
use crate::graph::SimpleGraph;

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &SimpleGraph) -> Result<Vec<u8>, HullError> {
    let serializable = SerializableGraph::from_graph(graph);
    bincode::serialize(&serializable)
        .map_err(|err| HullError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<SimpleGraph, HullError> {
    let serializable: SerializableGraph = bincode::deserialize(bytes)
        .map_err(|err| HullError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    serializable.into_graph()
}

/// Serializes the graph to a JSON string.
pub fn graph_to_json(graph: &SimpleGraph) -> Result<String, HullError> {
    let serializable = SerializableGraph::from_graph(graph);
    serde_json::to_string_pretty(&serializable)
        .map_err(|err| HullError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a JSON string.
pub fn graph_from_json(json: &str) -> Result<SimpleGraph, HullError> {
    let serializable: SerializableGraph = serde_json::from_str(json)
        .map_err(|err| HullError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    serializable.into_graph()
}

#[derive(Debug, Serialize, Deserialize)]
struct SerializableGraph {
    directed: bool,
    schema_version: SchemaVersion,
    vertices: Vec<u64>,
    edges: Vec<(u64, u64)>,
}

impl SerializableGraph {
    fn from_graph(graph: &SimpleGraph) -> Self {
        Self {
            directed: graph.config().directed,
            schema_version: graph.config().schema_version,
            vertices: graph.vertices().map(|id| id.as_raw()).collect(),
            edges: graph
                .edges()
                .into_iter()
                .map(|(u, v)| (u.as_raw(), v.as_raw()))
                .collect(),
        }
    }

    fn into_graph(self) -> Result<SimpleGraph, HullError> {
        let supported = GraphConfig::default().schema_version;
        if !supported.is_compatible_with(&self.schema_version) {
            return Err(HullError::Serde(
                ErrorInfo::new("schema-mismatch", "payload schema is not supported")
                    .with_context(
                        "found",
                        format!(
                            "{}.{}.{}",
                            self.schema_version.major,
                            self.schema_version.minor,
                            self.schema_version.patch
                        ),
                    ),
            ));
        }
        let config = GraphConfig {
            directed: self.directed,
            schema_version: self.schema_version,
        };
        let mut graph = SimpleGraph::new(config);
        for raw in self.vertices {
            graph.add_vertex(VertexId::from_raw(raw))?;
        }
        for (u, v) in self.edges {
            graph.add_edge(VertexId::from_raw(u), VertexId::from_raw(v))?;
        }
        Ok(graph)
    }
}
