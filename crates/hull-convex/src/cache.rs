//! Shortest-path incidence rows for every unordered vertex pair.

use hull_core::DistanceMatrix;

use crate::bitset::Bitset;

/// Triangular table mapping each pair `i < j` to the set
/// `{k : d(i,k) + d(k,j) = d(i,j)}`.
///
/// Built once from a distance matrix and read-only afterwards. Rows for
/// unreachable pairs hold only `{i, j}`; convexity on disconnected graphs is
/// only meaningful per connected component.
#[derive(Debug, Clone)]
pub struct PairIncidenceCache {
    order: usize,
    rows: Vec<Bitset>,
}

impl PairIncidenceCache {
    /// Builds every row from the distance matrix in `O(n^3)`.
    pub fn build(distances: &DistanceMatrix) -> Self {
        let order = distances.order();
        let mut rows = Vec::with_capacity(order * order.saturating_sub(1) / 2);
        for j in 1..order {
            for i in 0..j {
                rows.push(incidence_row(distances, i, j));
            }
        }
        Self { order, rows }
    }

    /// Number of vertices the rows range over.
    pub fn order(&self) -> usize {
        self.order
    }

    /// Number of stored pair rows, `n (n - 1) / 2`.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns whether no pair is stored (fewer than two vertices).
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of the unordered pair `{i, j}` in the triangular table.
    #[inline]
    pub fn pair_rank(i: usize, j: usize) -> usize {
        debug_assert_ne!(i, j);
        let (low, high) = if i < j { (i, j) } else { (j, i) };
        high * (high - 1) / 2 + low
    }

    /// Vertices on some shortest path between `i` and `j` (in either order).
    #[inline]
    pub fn interval(&self, i: usize, j: usize) -> &Bitset {
        &self.rows[Self::pair_rank(i, j)]
    }
}

fn incidence_row(distances: &DistanceMatrix, i: usize, j: usize) -> Bitset {
    let order = distances.order();
    let mut row = Bitset::new(order);
    row.insert(i);
    row.insert(j);
    if !distances.is_reachable(i, j) {
        return row;
    }
    let target = u64::from(distances.get(i, j));
    for k in 0..order {
        if !distances.is_reachable(i, k) || !distances.is_reachable(k, j) {
            continue;
        }
        if u64::from(distances.get(i, k)) + u64::from(distances.get(k, j)) == target {
            row.insert(k);
        }
    }
    row
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_enumerate_the_triangle() {
        let mut seen = Vec::new();
        for j in 1..6 {
            for i in 0..j {
                seen.push(PairIncidenceCache::pair_rank(i, j));
                assert_eq!(
                    PairIncidenceCache::pair_rank(i, j),
                    PairIncidenceCache::pair_rank(j, i)
                );
            }
        }
        assert_eq!(seen, (0..15).collect::<Vec<_>>());
    }

    #[test]
    fn path_rows_cover_the_segment() {
        let distances =
            DistanceMatrix::from_rows(vec![vec![0, 1, 2], vec![1, 0, 1], vec![2, 1, 0]]).unwrap();
        let cache = PairIncidenceCache::build(&distances);
        assert_eq!(cache.len(), 3);
        assert_eq!(cache.interval(0, 2).iter().collect::<Vec<_>>(), vec![0, 1, 2]);
        assert_eq!(cache.interval(1, 0).iter().collect::<Vec<_>>(), vec![0, 1]);
    }

    #[test]
    fn unreachable_pairs_hold_only_their_endpoints() {
        let distances = DistanceMatrix::unreachable(3);
        let cache = PairIncidenceCache::build(&distances);
        assert_eq!(cache.interval(0, 2).iter().collect::<Vec<_>>(), vec![0, 2]);
    }
}
