use std::collections::BTreeMap;
use std::ops::Range;

use hull_core::errors::{ErrorInfo, HullError};
use hull_core::{ObjectiveSense, OptimizationBackend};

use crate::config::BranchConfig;
use crate::search::{search, Outcome};

/// Linear row `lower <= sum(coefficient * x[index]) <= upper` over binary variables.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct LinearConstraint {
    pub(crate) terms: Vec<(usize, f64)>,
    pub(crate) lower: f64,
    pub(crate) upper: f64,
}

#[derive(Debug, Clone, PartialEq)]
struct Solution {
    values: Vec<bool>,
    objective: f64,
}

/// Incremental binary program solved exactly by depth-first branch and bound
/// with bound propagation.
///
/// Constraints persist across calls to [`OptimizationBackend::solve`]. The
/// search is exponential in the worst case and intended for the small models
/// produced by lazy constraint generation.
#[derive(Debug, Clone, Default)]
pub struct BinaryProgram {
    config: BranchConfig,
    objective: Vec<f64>,
    sense: ObjectiveSense,
    constraints: Vec<LinearConstraint>,
    solution: Option<Solution>,
    last_node_count: u64,
}

impl BinaryProgram {
    /// Creates an empty program with the provided search options.
    pub fn new(config: BranchConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Returns the search options.
    pub fn config(&self) -> &BranchConfig {
        &self.config
    }

    /// Returns the number of search nodes explored by the last `solve`.
    pub fn last_node_count(&self) -> u64 {
        self.last_node_count
    }

    /// Returns the 0/1 values of the last solution.
    pub fn solution_values(&self) -> Option<&[bool]> {
        self.solution.as_ref().map(|solution| solution.values.as_slice())
    }
}

impl OptimizationBackend for BinaryProgram {
    fn add_binary_variables(
        &mut self,
        count: usize,
        objective_coefficient: f64,
    ) -> Result<Range<usize>, HullError> {
        if !objective_coefficient.is_finite() {
            return Err(solver_error("non-finite", "objective coefficient must be finite")
                .with_context("coefficient", objective_coefficient));
        }
        let start = self.objective.len();
        self.objective
            .extend(std::iter::repeat(objective_coefficient).take(count));
        Ok(start..self.objective.len())
    }

    fn set_objective_sense(&mut self, sense: ObjectiveSense) {
        self.sense = sense;
    }

    fn add_linear_constraint(
        &mut self,
        terms: &[(usize, f64)],
        lower_bound: Option<f64>,
        upper_bound: Option<f64>,
    ) -> Result<usize, HullError> {
        let mut merged: BTreeMap<usize, f64> = BTreeMap::new();
        for &(index, coefficient) in terms {
            if index >= self.objective.len() {
                return Err(solver_error(
                    "unknown-variable",
                    "constraint references a missing variable",
                )
                .with_context("index", index)
                .with_context("variables", self.objective.len()));
            }
            if !coefficient.is_finite() {
                return Err(solver_error("non-finite", "constraint coefficient must be finite")
                    .with_context("index", index));
            }
            *merged.entry(index).or_insert(0.0) += coefficient;
        }
        let lower = lower_bound.unwrap_or(f64::NEG_INFINITY);
        let upper = upper_bound.unwrap_or(f64::INFINITY);
        if lower.is_nan() || upper.is_nan() || lower > upper {
            return Err(solver_error("empty-range", "constraint bounds describe an empty range")
                .with_context("lower", lower)
                .with_context("upper", upper));
        }
        self.constraints.push(LinearConstraint {
            terms: merged.into_iter().filter(|(_, c)| *c != 0.0).collect(),
            lower,
            upper,
        });
        Ok(self.constraints.len() - 1)
    }

    fn solve(&mut self) -> Result<f64, HullError> {
        let costs: Vec<f64> = match self.sense {
            ObjectiveSense::Minimize => self.objective.clone(),
            ObjectiveSense::Maximize => self.objective.iter().map(|c| -c).collect(),
        };
        let (outcome, nodes) = search(&costs, &self.constraints, &self.config);
        self.last_node_count = nodes;
        tracing::debug!(
            variables = self.objective.len(),
            constraints = self.constraints.len(),
            nodes,
            "branch and bound finished"
        );
        match outcome {
            Outcome::Optimal(values) => {
                let objective = values
                    .iter()
                    .zip(&self.objective)
                    .filter(|(value, _)| **value)
                    .map(|(_, coefficient)| coefficient)
                    .sum::<f64>();
                tracing::debug!(objective, "optimum");
                self.solution = Some(Solution { values, objective });
                Ok(objective)
            }
            Outcome::Infeasible => {
                self.solution = None;
                Err(solver_error("infeasible", "binary program has no feasible assignment")
                    .with_context("constraints", self.constraints.len()))
            }
            Outcome::NodeLimit => {
                self.solution = None;
                Err(solver_error("node-limit", "search node limit reached before optimality")
                    .with_context("nodes", nodes)
                    .with_hint("raise BranchConfig::node_limit"))
            }
        }
    }

    fn variable_value(&self, index: usize) -> Result<f64, HullError> {
        let solution = self.solution.as_ref().ok_or_else(no_solution)?;
        solution
            .values
            .get(index)
            .map(|value| if *value { 1.0 } else { 0.0 })
            .ok_or_else(|| {
                solver_error("unknown-variable", "variable is not part of the last solution")
                    .with_context("index", index)
            })
    }

    fn objective_value(&self) -> Result<f64, HullError> {
        self.solution
            .as_ref()
            .map(|solution| solution.objective)
            .ok_or_else(no_solution)
    }

    fn num_variables(&self) -> usize {
        self.objective.len()
    }

    fn num_constraints(&self) -> usize {
        self.constraints.len()
    }
}

fn solver_error(code: impl Into<String>, message: impl Into<String>) -> HullError {
    HullError::Solver(ErrorInfo::new(code, message))
}

fn no_solution() -> HullError {
    solver_error("no-solution", "solve has not produced a solution yet")
}
