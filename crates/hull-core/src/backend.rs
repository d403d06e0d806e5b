//! Minimal capability set required from a 0/1 optimization backend.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::errors::HullError;

/// Direction of the objective function.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ObjectiveSense {
    /// Minimize the objective.
    #[default]
    Minimize,
    /// Maximize the objective.
    Maximize,
}

/// Incremental binary program solver.
///
/// Constraints added between two calls to [`OptimizationBackend::solve`] are
/// kept; the cutting-plane loop relies on this to grow the model lazily.
pub trait OptimizationBackend {
    /// Adds `count` binary variables sharing the same objective coefficient and
    /// returns the index range assigned to them.
    fn add_binary_variables(
        &mut self,
        count: usize,
        objective_coefficient: f64,
    ) -> Result<Range<usize>, HullError>;

    /// Sets the objective direction.
    fn set_objective_sense(&mut self, sense: ObjectiveSense);

    /// Adds `lower <= sum(coefficient * x[index]) <= upper`; `None` means unbounded.
    /// Returns the index of the new constraint.
    fn add_linear_constraint(
        &mut self,
        terms: &[(usize, f64)],
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
    ) -> Result<usize, HullError>;

    /// Solves the current model and returns the optimal objective value.
    fn solve(&mut self) -> Result<f64, HullError>;

    /// Returns the value of a variable in the last solution.
    fn variable_value(&self, index: usize) -> Result<f64, HullError>;

    /// Returns the objective value of the last solution.
    fn objective_value(&self) -> Result<f64, HullError>;

    /// Returns the number of variables in the model.
    fn num_variables(&self) -> usize;

    /// Returns the number of constraints in the model.
    fn num_constraints(&self) -> usize;
}
