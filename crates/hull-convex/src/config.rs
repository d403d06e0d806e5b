use hull_core::errors::{ErrorInfo, HullError};
use serde::{Deserialize, Serialize};

fn default_max_iterations() -> usize {
    10_000
}

/// Options controlling the hull number cutting-plane loop.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolverConfig {
    /// Upper bound on constraint-generation rounds before giving up.
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Emit an `info` event for every generated constraint.
    #[serde(default)]
    pub verbose: bool,
    /// Keep every generated constraint in the returned report.
    #[serde(default)]
    pub record_constraints: bool,
}

impl SolverConfig {
    /// Rejects option values the solver cannot run with.
    pub fn validate(&self) -> Result<(), HullError> {
        if self.max_iterations == 0 {
            return Err(HullError::Config(
                ErrorInfo::new("zero-iterations", "max_iterations must be at least one")
                    .with_context("max_iterations", self.max_iterations),
            ));
        }
        Ok(())
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            verbose: false,
            record_constraints: false,
        }
    }
}
