#![deny(missing_docs)]

//! Geodesic convexity on undirected graphs: convex hulls through a cached
//! shortest-path incidence table, and the hull number through lazy
//! constraint generation over a 0/1 optimization backend.

pub mod bitset;
mod cache;
mod closure;
mod config;
mod convexity;
mod greedy;
mod index;
mod snapshot;
mod solver;

pub use bitset::Bitset;
pub use cache::PairIncidenceCache;
pub use closure::ClosureEngine;
pub use config::SolverConfig;
pub use convexity::{ConvexityProperties, HullNumber, HullNumberReport};
pub use greedy::GreedyExpander;
pub use index::VertexIndexer;
pub use snapshot::structural_digest;
pub use solver::{HullNumberSolver, Phase, SolveOutcome};
