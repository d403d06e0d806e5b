//! Lazy constraint generation for the hull number.
//!
//! A set generates the whole graph iff it meets the complement of every
//! proper convex set, so the hull number is a minimum hitting set over those
//! complements. The loop only adds the complements of greedy expansions of
//! infeasible candidates, and stops at the first optimal candidate whose hull
//! spans the graph.

use std::fmt::Debug;

use hull_core::errors::{ErrorInfo, HullError};
use hull_core::{ObjectiveSense, OptimizationBackend};

use crate::bitset::Bitset;
use crate::cache::PairIncidenceCache;
use crate::closure::ClosureEngine;
use crate::config::SolverConfig;
use crate::greedy::GreedyExpander;
use crate::index::VertexIndexer;

/// States of the cutting-plane loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Expand the working set and add the complement constraint.
    BuildingConstraint,
    /// Ask the backend for an optimal assignment.
    Solving,
    /// Test whether the candidate generates the whole graph.
    CheckingFeasibility(Bitset),
    /// The candidate generates the whole graph.
    Done(Bitset),
}

/// Result of a cutting-plane run, in index space.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    /// Minimum generating set.
    pub generators: Bitset,
    /// Number of constraint-generation rounds.
    pub iterations: usize,
    /// Proper convex sets whose complements were added, when recorded.
    pub constraints: Vec<Bitset>,
}

/// Drives an [`OptimizationBackend`] until its optimum generates the graph.
#[derive(Debug)]
pub struct HullNumberSolver<'a, V> {
    engine: ClosureEngine<'a>,
    expander: GreedyExpander<'a>,
    indexer: &'a VertexIndexer<V>,
    config: &'a SolverConfig,
}

impl<'a, V: Clone + Ord + Debug> HullNumberSolver<'a, V> {
    /// Creates a solver over a built cache; `indexer` is used for diagnostics.
    pub fn new(
        cache: &'a PairIncidenceCache,
        indexer: &'a VertexIndexer<V>,
        config: &'a SolverConfig,
    ) -> Self {
        let engine = ClosureEngine::new(cache);
        Self {
            engine,
            expander: GreedyExpander::new(engine),
            indexer,
            config,
        }
    }

    /// Computes a minimum generating set.
    ///
    /// Graphs with at most two vertices need every vertex and never reach the
    /// backend. Backend failures propagate unchanged.
    pub fn solve<B: OptimizationBackend>(
        &self,
        backend: &mut B,
    ) -> Result<SolveOutcome, HullError> {
        self.config.validate()?;
        let order = self.engine.order();
        if order <= 2 {
            return Ok(SolveOutcome {
                generators: Bitset::full(order),
                iterations: 0,
                constraints: Vec::new(),
            });
        }

        let variables = backend.add_binary_variables(order, 1.0)?;
        backend.set_objective_sense(ObjectiveSense::Minimize);
        let all_terms: Vec<(usize, f64)> = variables.clone().map(|var| (var, 1.0)).collect();
        backend.add_linear_constraint(&all_terms, Some(2.0), None)?;

        let mut working = Bitset::new(order);
        let mut constraints = Vec::new();
        let mut iterations = 0usize;
        let mut phase = Phase::BuildingConstraint;
        loop {
            phase = match phase {
                Phase::BuildingConstraint => {
                    iterations += 1;
                    if iterations > self.config.max_iterations {
                        return Err(HullError::Solver(
                            ErrorInfo::new("iteration-cap", "cutting-plane loop did not converge")
                                .with_context("max_iterations", self.config.max_iterations)
                                .with_hint("check that the backend returns optimal 0/1 solutions"),
                        ));
                    }
                    self.expander.expand_until_proper(&mut working)?;
                    let terms: Vec<(usize, f64)> = working
                        .complement()
                        .iter()
                        .map(|vertex| (variables.start + vertex, 1.0))
                        .collect();
                    backend.add_linear_constraint(&terms, Some(1.0), None)?;
                    if self.config.verbose {
                        tracing::info!(
                            iteration = iterations,
                            convex_set = ?self.indexer.to_labels(&working),
                            outside = terms.len(),
                            "added constraint: at least one vertex outside the convex set"
                        );
                    }
                    if self.config.record_constraints {
                        constraints.push(working.clone());
                    }
                    Phase::Solving
                }
                Phase::Solving => {
                    let objective = backend.solve()?;
                    let mut candidate = Bitset::new(order);
                    for vertex in 0..order {
                        if backend.variable_value(variables.start + vertex)? > 0.5 {
                            candidate.insert(vertex);
                        }
                    }
                    tracing::debug!(
                        iteration = iterations,
                        objective,
                        candidate = candidate.count(),
                        "backend solved"
                    );
                    Phase::CheckingFeasibility(candidate)
                }
                Phase::CheckingFeasibility(candidate) => {
                    let hull = self.engine.hull_of(&candidate);
                    if hull.is_full() {
                        Phase::Done(candidate)
                    } else {
                        working = hull;
                        Phase::BuildingConstraint
                    }
                }
                Phase::Done(generators) => {
                    tracing::debug!(
                        iterations,
                        hull_number = generators.count(),
                        "hull number found"
                    );
                    return Ok(SolveOutcome {
                        generators,
                        iterations,
                        constraints,
                    });
                }
            };
        }
    }
}
