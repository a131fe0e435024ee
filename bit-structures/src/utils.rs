use crate::bit_block::BitBlock;

/// Bitwise binary search the range 0..n based on the function `lower_bound_pad`
/// from this article:
///   https://orlp.net/blog/bitwise-binary-search/
///
/// Returns the index of the partition point according to the given predicate
/// (the index of the first element of the second partition).
///
/// The range is assumed to be partitioned according to the given predicate.
/// This means that all indices for which the predicate returns true are at
/// the start of the range and all indices for which the predicate returns
/// false are at the end.
///
/// If the range is not partitioned, the returned result is unspecified
/// and meaningless, as this method performs a kind of binary search.
///
/// See https://doc.rust-lang.org/1.69.0/std/primitive.slice.html#method.partition_point
pub fn partition_point(n: usize, pred: impl Fn(usize) -> bool) -> usize {
    let mut b = 0;
    let mut bit = bit_floor(n);
    while bit != 0 {
        let i = (b | bit) - 1;
        if i < n && pred(i) {
            b |= bit
        }
        bit >>= 1;
    }
    b
}

pub fn bit_floor(n: usize) -> usize {
    if n == 0 {
        0
    } else {
        let msb = usize::BITS - 1 - n.leading_zeros();
        1 << msb
    }
}

/// Bit offset of the `n`-th 1-bit (0-based) within `block`, counting from the LSB.
/// The caller guarantees that `block` has more than `n` 1-bits.
pub fn select1_in_block<Block: BitBlock>(mut block: Block, n: u32) -> u32 {
    debug_assert!(block.count_ones() > n);
    for _ in 0..n {
        block &= block - Block::one(); // unset the lowest 1-bit
    }
    block.trailing_zeros()
}
