//! Seeded randomness for graph generators and randomized tests.

use rand::distributions::{Bernoulli, Distribution};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::errors::{ErrorInfo, HullError};

/// Reproducible random source keyed by an explicit `u64` seed.
///
/// Two handles built from the same seed draw the same sequence of parents
/// and edge decisions on every platform `StdRng` supports.
#[derive(Debug, Clone)]
pub struct RngHandle {
    seed: u64,
    rng: StdRng,
}

impl RngHandle {
    /// Creates a new handle from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seed the handle was created with.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform index in `0..bound`, or `None` when `bound` is zero.
    pub fn index_below(&mut self, bound: usize) -> Option<usize> {
        (bound > 0).then(|| self.rng.gen_range(0..bound))
    }

    /// Builds a coin that lands heads with probability `p`.
    pub fn coin(p: f64) -> Result<Bernoulli, HullError> {
        Bernoulli::new(p).map_err(|_| {
            HullError::Config(
                ErrorInfo::new("probability-range", "probability must lie in [0, 1]")
                    .with_context("probability", p),
            )
        })
    }

    /// Flips a coin built with [`RngHandle::coin`].
    pub fn flip(&mut self, coin: &Bernoulli) -> bool {
        coin.sample(&mut self.rng)
    }
}
