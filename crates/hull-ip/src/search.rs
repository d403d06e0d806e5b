use crate::config::BranchConfig;
use crate::program::LinearConstraint;

pub(crate) enum Outcome {
    Optimal(Vec<bool>),
    Infeasible,
    NodeLimit,
}

struct SearchState<'a> {
    costs: &'a [f64],
    constraints: &'a [LinearConstraint],
    tolerance: f64,
    node_limit: Option<u64>,
    nodes: u64,
    best: Option<(f64, Vec<bool>)>,
    exhausted: bool,
}

/// Minimizes `costs . x` over binary `x` subject to `constraints`.
///
/// Returns the outcome together with the number of explored nodes.
pub(crate) fn search(
    costs: &[f64],
    constraints: &[LinearConstraint],
    config: &BranchConfig,
) -> (Outcome, u64) {
    let mut state = SearchState {
        costs,
        constraints,
        tolerance: config.tolerance,
        node_limit: config.node_limit,
        nodes: 0,
        best: None,
        exhausted: false,
    };
    let assignment = vec![None; costs.len()];
    state.explore(assignment);
    let outcome = if state.exhausted {
        Outcome::NodeLimit
    } else {
        match state.best {
            Some((_, values)) => Outcome::Optimal(values),
            None => Outcome::Infeasible,
        }
    };
    (outcome, state.nodes)
}

impl SearchState<'_> {
    fn explore(&mut self, mut assignment: Vec<Option<bool>>) {
        if self.exhausted {
            return;
        }
        self.nodes += 1;
        if let Some(limit) = self.node_limit {
            if self.nodes > limit {
                self.exhausted = true;
                return;
            }
        }
        if !self.propagate(&mut assignment) {
            return;
        }
        if let Some((best, _)) = &self.best {
            if self.lower_bound(&assignment) >= *best - self.tolerance {
                return;
            }
        }

        let Some(branch) = assignment.iter().position(Option::is_none) else {
            let values: Vec<bool> = assignment.iter().map(|v| v.unwrap_or(false)).collect();
            let cost = self.lower_bound(&assignment);
            self.best = Some((cost, values));
            return;
        };

        let cheap_first = if self.costs[branch] > 0.0 {
            [false, true]
        } else {
            [true, false]
        };
        for value in cheap_first {
            let mut child = assignment.clone();
            child[branch] = Some(value);
            self.explore(child);
        }
    }

    /// Objective of the fixed part plus every negative free cost.
    fn lower_bound(&self, assignment: &[Option<bool>]) -> f64 {
        assignment
            .iter()
            .zip(self.costs)
            .map(|(value, cost)| match value {
                Some(true) => *cost,
                Some(false) => 0.0,
                None => cost.min(0.0),
            })
            .sum()
    }

    /// Fixes variables whose other value would make some row infeasible.
    /// Returns `false` when a row cannot be satisfied any more.
    fn propagate(&self, assignment: &mut [Option<bool>]) -> bool {
        loop {
            let mut changed = false;
            for row in self.constraints {
                let activity = RowActivity::of(row, assignment);
                if activity.min() > row.upper + self.tolerance
                    || activity.max() < row.lower - self.tolerance
                {
                    return false;
                }
                for &(index, coefficient) in &row.terms {
                    if assignment[index].is_some() {
                        continue;
                    }
                    let (min_if_one, max_if_one, min_if_zero, max_if_zero) = if coefficient > 0.0 {
                        (
                            activity.min() + coefficient,
                            activity.max(),
                            activity.min(),
                            activity.max() - coefficient,
                        )
                    } else {
                        (
                            activity.min(),
                            activity.max() + coefficient,
                            activity.min() - coefficient,
                            activity.max(),
                        )
                    };
                    let one_ok = min_if_one <= row.upper + self.tolerance
                        && max_if_one >= row.lower - self.tolerance;
                    let zero_ok = min_if_zero <= row.upper + self.tolerance
                        && max_if_zero >= row.lower - self.tolerance;
                    match (zero_ok, one_ok) {
                        (false, false) => return false,
                        (true, false) => assignment[index] = Some(false),
                        (false, true) => assignment[index] = Some(true),
                        (true, true) => continue,
                    }
                    changed = true;
                    break;
                }
                if changed {
                    break;
                }
            }
            if !changed {
                return true;
            }
        }
    }
}

struct RowActivity {
    fixed: f64,
    free_negative: f64,
    free_positive: f64,
}

impl RowActivity {
    fn of(row: &LinearConstraint, assignment: &[Option<bool>]) -> Self {
        let mut activity = RowActivity {
            fixed: 0.0,
            free_negative: 0.0,
            free_positive: 0.0,
        };
        for &(index, coefficient) in &row.terms {
            match assignment[index] {
                Some(true) => activity.fixed += coefficient,
                Some(false) => {}
                None if coefficient < 0.0 => activity.free_negative += coefficient,
                None => activity.free_positive += coefficient,
            }
        }
        activity
    }

    fn min(&self) -> f64 {
        self.fixed + self.free_negative
    }

    fn max(&self) -> f64 {
        self.fixed + self.free_positive
    }
}
