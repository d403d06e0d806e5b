#![deny(missing_docs)]

//! Simple graphs, a BFS distance oracle and graph generators implementing the
//! `hull-core` contracts.

mod bfs;
mod flags;
mod generators;
mod graph;
mod ids;
mod serialization;

pub use bfs::BfsOracle;
pub use flags::GraphConfig;
pub use generators::{
    complete_graph, cycle_graph, directed_cycle_graph, grid_graph, path_graph, petersen_graph,
    random_connected_graph, star_graph,
};
pub use graph::SimpleGraph;

/// Re-export serialization helpers for downstream crates.
pub use serialization::{graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json};
