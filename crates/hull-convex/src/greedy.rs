use hull_core::errors::{ErrorInfo, HullError};

use crate::bitset::Bitset;
use crate::closure::ClosureEngine;

/// Grows a vertex set to a maximal one whose hull is still a proper subset
/// of the vertex set.
#[derive(Debug, Clone, Copy)]
pub struct GreedyExpander<'a> {
    engine: ClosureEngine<'a>,
}

impl<'a> GreedyExpander<'a> {
    /// Creates an expander on top of a closure engine.
    pub fn new(engine: ClosureEngine<'a>) -> Self {
        Self { engine }
    }

    /// Adds vertices in increasing index order, keeping each one whose
    /// addition leaves the hull proper.
    ///
    /// The result is convex: a vertex inside the final hull would have been
    /// accepted when it was visited. Fails when the hull of the input already
    /// spans every vertex.
    pub fn expand_until_proper<'s>(
        &self,
        set: &'s mut Bitset,
    ) -> Result<&'s mut Bitset, HullError> {
        if self.engine.hull_of(set).is_full() {
            return Err(HullError::Graph(
                ErrorInfo::new(
                    "closure-spans-graph",
                    "hull of the input already covers every vertex",
                )
                .with_context("members", set.count())
                .with_context("order", self.engine.order()),
            ));
        }
        let mut candidate = Bitset::new(set.capacity());
        for vertex in 0..self.engine.order() {
            if set.contains(vertex) {
                continue;
            }
            candidate.clone_from(set);
            candidate.insert(vertex);
            if !self.engine.closure(&mut candidate).is_full() {
                set.insert(vertex);
            }
        }
        Ok(set)
    }
}
