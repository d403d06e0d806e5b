//! Word-packed fixed-capacity bit-vector used for every vertex subset.

use std::fmt;

const WORD_BITS: usize = 64;

/// Fixed-capacity set of indices in `0..capacity`, packed into `u64` words.
///
/// Bits beyond `capacity` in the last word are always zero, so equality,
/// hashing and [`Bitset::count`] only see real members.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Bitset {
    capacity: usize,
    words: Vec<u64>,
}

impl Bitset {
    /// Creates an empty set able to hold indices `0..capacity`.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            words: vec![0; capacity.div_ceil(WORD_BITS)],
        }
    }

    /// Creates the set `{0, .., capacity - 1}`.
    pub fn full(capacity: usize) -> Self {
        let mut set = Self::new(capacity);
        for word in set.words.iter_mut() {
            *word = u64::MAX;
        }
        set.clear_tail();
        set
    }

    /// Creates a set from the given indices.
    pub fn from_indices(capacity: usize, indices: impl IntoIterator<Item = usize>) -> Self {
        let mut set = Self::new(capacity);
        for index in indices {
            set.insert(index);
        }
        set
    }

    /// Returns the number of representable indices.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns whether `index` is a member.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        index < self.capacity && (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 != 0
    }

    /// Adds `index`; returns `true` when it was not present before.
    #[inline]
    pub fn insert(&mut self, index: usize) -> bool {
        debug_assert!(index < self.capacity, "index {index} out of range");
        let word = &mut self.words[index / WORD_BITS];
        let mask = 1u64 << (index % WORD_BITS);
        let fresh = *word & mask == 0;
        *word |= mask;
        fresh
    }

    /// Removes `index`; returns `true` when it was present.
    pub fn remove(&mut self, index: usize) -> bool {
        if !self.contains(index) {
            return false;
        }
        self.words[index / WORD_BITS] &= !(1u64 << (index % WORD_BITS));
        true
    }

    /// In-place union with a set of the same capacity.
    #[inline]
    pub fn union_with(&mut self, other: &Bitset) {
        debug_assert_eq!(self.capacity, other.capacity);
        for (word, other) in self.words.iter_mut().zip(&other.words) {
            *word |= *other;
        }
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.words.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns whether the set has no members.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|word| *word == 0)
    }

    /// Returns whether every index in `0..capacity` is a member.
    pub fn is_full(&self) -> bool {
        self.count() == self.capacity
    }

    /// Returns whether every member of `self` is also in `other`.
    pub fn is_subset(&self, other: &Bitset) -> bool {
        self.words
            .iter()
            .zip(&other.words)
            .all(|(word, other)| word & !other == 0)
    }

    /// Returns the set of indices in `0..capacity` that are not members.
    pub fn complement(&self) -> Bitset {
        let mut complement = Bitset {
            capacity: self.capacity,
            words: self.words.iter().map(|word| !word).collect(),
        };
        complement.clear_tail();
        complement
    }

    /// Removes every member.
    pub fn clear(&mut self) {
        for word in self.words.iter_mut() {
            *word = 0;
        }
    }

    /// Iterates over members in increasing order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            word_index: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    fn clear_tail(&mut self) {
        let used = self.capacity % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1u64 << used) - 1;
            }
        }
    }
}

impl fmt::Debug for Bitset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a Bitset {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ascending iterator over the members of a [`Bitset`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    words: &'a [u64],
    word_index: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        loop {
            if self.current != 0 {
                let bit = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1;
                return Some(self.word_index * WORD_BITS + bit);
            }
            self.word_index += 1;
            self.current = *self.words.get(self.word_index)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_boundaries_are_handled() {
        let mut set = Bitset::new(130);
        for index in [0, 63, 64, 127, 128, 129] {
            assert!(set.insert(index));
        }
        assert!(!set.insert(64));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![0, 63, 64, 127, 128, 129]);
        assert_eq!(set.count(), 6);
        assert!(set.remove(63));
        assert!(!set.contains(63));
    }

    #[test]
    fn full_and_complement_ignore_tail_bits() {
        let full = Bitset::full(70);
        assert_eq!(full.count(), 70);
        assert!(full.is_full());
        assert!(full.complement().is_empty());

        let partial = Bitset::from_indices(70, [1, 69]);
        let complement = partial.complement();
        assert_eq!(complement.count(), 68);
        assert!(!complement.contains(69));
    }

    #[test]
    fn union_and_subset() {
        let mut a = Bitset::from_indices(10, [1, 2]);
        let b = Bitset::from_indices(10, [2, 7]);
        assert!(!b.is_subset(&a));
        a.union_with(&b);
        assert!(b.is_subset(&a));
        assert_eq!(format!("{a:?}"), "{1, 2, 7}");
    }

    #[test]
    fn zero_capacity_set_is_empty_and_full() {
        let set = Bitset::new(0);
        assert!(set.is_empty());
        assert!(set.is_full());
        assert_eq!(set.iter().next(), None);
    }
}
