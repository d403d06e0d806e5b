#![deny(missing_docs)]

//! Exact 0/1 branch-and-bound backend implementing
//! [`hull_core::OptimizationBackend`].

mod config;
mod program;
mod search;

pub use config::BranchConfig;
pub use program::BinaryProgram;
