// Simple bit vector implemented as a slice containing the sorted indices of set bits.
// Serves as the naive baseline that the succinct structures are tested against.

use std::debug_assert;

use crate::bit_vec::BitVec;
use crate::utils::partition_point;

#[derive(Debug)]
pub struct SliceBitVec {
    ones: Box<[usize]>,
    len: usize,
}

impl SliceBitVec {
    pub fn new(ones: &[usize], len: usize) -> Self {
        debug_assert!(
            ones.windows(2).all(|w| w[0] < w[1]),
            "ones must be monotonically increasing"
        );
        debug_assert!(ones.len() <= len);
        Self {
            ones: ones.into(),
            len,
        }
    }
}

impl BitVec for SliceBitVec {
    fn rank1(&self, i: usize) -> usize {
        if i >= self.len() {
            return self.num_ones();
        }
        partition_point(self.num_ones(), |n| self.ones[n] < i)
    }

    fn select1(&self, n: usize) -> Option<usize> {
        if n >= self.num_ones() {
            return None;
        }
        Some(self.ones[n])
    }

    fn num_ones(&self) -> usize {
        self.ones.len()
    }

    fn len(&self) -> usize {
        self.len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bitvector() {
        // The naive bitvector is the baseline for the others, so check it directly.
        crate::bit_vec::test_bitvector(SliceBitVec::new);
    }

    #[test]
    fn test_empty() {
        let bv = SliceBitVec::new(&[], 0);
        assert_eq!(bv.rank1(0), 0);
        assert_eq!(bv.rank0(3), 0);
        assert_eq!(bv.select1(0), None);
        assert_eq!(bv.select0(0), None);
    }
}
