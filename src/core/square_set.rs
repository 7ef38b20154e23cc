//! A small set of squares, backed by a `u64` where bit `n` stands for `SQ(n)`.
//!
//! Used to hold the castling rights of a position: the squares whose kings and rooks
//! have not moved yet.

use std::fmt;

use super::sq::SQ;

/// A set of `SQ`s.
#[derive(Copy, Clone, Default, Hash, PartialEq, Eq)]
#[repr(transparent)]
pub struct SquareSet(pub u64);

impl SquareSet {
    /// An empty set.
    pub const EMPTY: SquareSet = SquareSet(0);

    /// Returns if the square is a member of the set.
    #[inline(always)]
    pub fn contains(self, sq: SQ) -> bool {
        debug_assert!(sq.is_okay());
        self.0 & (1u64 << sq.0) != 0
    }

    /// Adds a square to the set.
    #[inline(always)]
    pub fn insert(&mut self, sq: SQ) {
        debug_assert!(sq.is_okay());
        self.0 |= 1u64 << sq.0;
    }

    /// Removes a square from the set, returning if it was present.
    #[inline(always)]
    pub fn remove(&mut self, sq: SQ) -> bool {
        let present = self.contains(sq);
        self.0 &= !(1u64 << sq.0);
        present
    }

    /// Returns the number of squares in the set.
    #[inline]
    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns if there are no squares in the set.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Iterates over the squares of the set, in increasing order.
    pub fn iter(self) -> SquareSetIter {
        SquareSetIter { bits: self.0 }
    }
}

impl std::iter::FromIterator<SQ> for SquareSet {
    fn from_iter<I: IntoIterator<Item = SQ>>(iter: I) -> Self {
        let mut set = SquareSet::EMPTY;
        for sq in iter {
            set.insert(sq);
        }
        set
    }
}

impl IntoIterator for SquareSet {
    type Item = SQ;
    type IntoIter = SquareSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the squares of a `SquareSet`.
pub struct SquareSetIter {
    bits: u64,
}

impl Iterator for SquareSetIter {
    type Item = SQ;

    #[inline]
    fn next(&mut self) -> Option<SQ> {
        if self.bits == 0 {
            None
        } else {
            let idx = self.bits.trailing_zeros() as u8;
            self.bits &= self.bits - 1;
            Some(SQ(idx))
        }
    }
}

impl fmt::Debug for SquareSet {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_set().entries(self.iter().map(|sq| sq.notation())).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_remove_iter() {
        let mut set: SquareSet = [SQ(63), SQ(0), SQ(4)].iter().copied().collect();
        assert_eq!(set.len(), 3);
        assert!(set.contains(SQ(4)));
        assert!(set.remove(SQ(4)));
        assert!(!set.remove(SQ(4)));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![SQ(0), SQ(63)]);
    }
}
