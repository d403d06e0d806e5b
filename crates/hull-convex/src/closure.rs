use crate::bitset::Bitset;
use crate::cache::PairIncidenceCache;

/// Computes convex hulls by repeated union of cached pair intervals.
#[derive(Debug, Clone, Copy)]
pub struct ClosureEngine<'a> {
    cache: &'a PairIncidenceCache,
}

impl<'a> ClosureEngine<'a> {
    /// Creates an engine reading from the given cache.
    pub fn new(cache: &'a PairIncidenceCache) -> Self {
        Self { cache }
    }

    /// Number of vertices.
    pub fn order(&self) -> usize {
        self.cache.order()
    }

    /// Replaces `set` by its convex hull and returns it.
    ///
    /// Each pass unions the interval of every pair currently in the set; the
    /// loop stops after the first pass that adds nothing, so at most `n`
    /// passes run.
    pub fn closure<'s>(&self, set: &'s mut Bitset) -> &'s mut Bitset {
        let order = self.cache.order();
        let mut passes = 0usize;
        loop {
            let before = set.count();
            for i in 0..order {
                if !set.contains(i) {
                    continue;
                }
                for j in (i + 1)..order {
                    if set.contains(j) {
                        set.union_with(self.cache.interval(i, j));
                    }
                }
            }
            passes += 1;
            let after = set.count();
            tracing::trace!(passes, before, after, "closure pass");
            if after == before {
                break;
            }
        }
        debug_assert!(passes <= order.max(1));
        set
    }

    /// Returns the hull of `set` without modifying it.
    pub fn hull_of(&self, set: &Bitset) -> Bitset {
        let mut hull = set.clone();
        self.closure(&mut hull);
        hull
    }

    /// Returns whether `set` equals its own hull.
    pub fn is_convex(&self, set: &Bitset) -> bool {
        self.hull_of(set).count() == set.count()
    }
}
