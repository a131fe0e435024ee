// Appendable bit vector with rank and select support.
// Bits are stored in 64-bit blocks, each paired with a rank sample holding the
// number of 1-bits that precede it. Since samples only look backwards, pushing
// a bit never invalidates an existing sample, so the structure is queryable at
// every point during construction.
// Rank is O(1); select0 and select1 binary search the rank samples and then
// scan a single block, so they are O(log(len)).
// See: Fast, Small, Simple Rank/Select on Bitmaps
// (https://users.dcc.uchile.cl/~gnavarro/ps/sea12.1.pdf)

use crate::bincode_helpers::{bincode_decode_impl, bincode_encode_impl};
use crate::bit_block::BitBlock;
use crate::bit_vec::BitVec;
use crate::utils::{partition_point, select1_in_block};

// This is the integer type used for blocks of bits.
type Block = u64;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RankSelectDict {
    // Store bits in blocks. Each block stores its bits in order from LSB to MSB.
    // Bits beyond `len` in the final block are always zero.
    blocks: Vec<Block>,
    // ranks[i] is the number of 1-bits in all blocks before the i-th block.
    ranks: Vec<usize>,
    // Number of bits in this bit vector
    len: usize,
    // Number of one bits in this bit vector
    num_ones: usize,
}

impl bincode::Encode for RankSelectDict {
    bincode_encode_impl!(blocks, ranks, len, num_ones);
}
impl bincode::Decode for RankSelectDict {
    bincode_decode_impl!(blocks, ranks, len, num_ones);
}

impl RankSelectDict {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single bit.
    pub fn push(&mut self, bit: bool) {
        self.push_run(bit, 1);
    }

    /// Append `n` copies of `bit`, filling up to a whole block at a time.
    pub fn push_run(&mut self, bit: bool, mut n: usize) {
        while n > 0 {
            let bit_offset = Block::bit_offset(self.len);
            if bit_offset == 0 {
                // Open a new block, sampling the rank up to its start
                self.blocks.push(0);
                self.ranks.push(self.num_ones);
            }
            let count = n.min(Block::BITS as usize - bit_offset);
            if bit {
                if let Some(block) = self.blocks.last_mut() {
                    *block |= Block::one_mask(count as u32) << bit_offset;
                }
                self.num_ones += count;
            }
            self.len += count;
            n -= count;
        }
    }

    /// Length of the run of consecutive 0-bits beginning at `index`, which ends
    /// at the next 1-bit or at the end of the bit vector.
    /// Cost is proportional to the run length divided by the block size.
    pub fn run_of_zeros(&self, index: usize) -> usize {
        if index >= self.len {
            return 0;
        }
        let (mut block_index, bit_offset) = Block::index_offset(index);
        let mut block = self.blocks[block_index] >> bit_offset;
        let mut run = 0;
        let mut available = Block::BITS as usize - bit_offset;
        loop {
            if block != 0 {
                run += block.trailing_zeros() as usize;
                break;
            }
            run += available;
            block_index += 1;
            if block_index == self.blocks.len() {
                break;
            }
            block = self.blocks[block_index];
            available = Block::BITS as usize;
        }
        // trailing bits in the final block are zero, so clamp to the length
        run.min(self.len - index)
    }

    /// Number of 0-bits preceding the `block_index`-th block.
    fn zeros_before_block(&self, block_index: usize) -> usize {
        (block_index << Block::BIT_WIDTH) - self.ranks[block_index]
    }

    /// Check that the derived fields agree with the bit data.
    fn validate(&self) -> Result<(), &'static str> {
        let (full_blocks, tail_bits) = Block::index_offset(self.len);
        let expected_blocks = full_blocks + usize::from(tail_bits > 0);
        if self.blocks.len() != expected_blocks {
            return Err("rank/select dictionary: block count does not match length");
        }
        if self.ranks.len() != self.blocks.len() {
            return Err("rank/select dictionary: rank sample count does not match block count");
        }
        let mut num_ones = 0;
        for (&block, &rank) in self.blocks.iter().zip(self.ranks.iter()) {
            if rank != num_ones {
                return Err("rank/select dictionary: inconsistent rank sample");
            }
            num_ones += block.count_ones() as usize;
        }
        if num_ones != self.num_ones {
            return Err("rank/select dictionary: inconsistent number of ones");
        }
        if let Some(&last) = self.blocks.last() {
            if tail_bits > 0 && last & !Block::one_mask(tail_bits as u32) != 0 {
                return Err("rank/select dictionary: bits set beyond length");
            }
        }
        Ok(())
    }
}

impl BitVec for RankSelectDict {
    // Returns the number of one bits strictly before index `index`.
    fn rank1(&self, index: usize) -> usize {
        if index >= self.len {
            return self.num_ones;
        }
        let (block_index, bit_offset) = Block::index_offset(index);
        let block = self.blocks[block_index] & Block::one_mask(bit_offset as u32);
        self.ranks[block_index] + block.count_ones() as usize
    }

    fn select1(&self, n: usize) -> Option<usize> {
        if n >= self.num_ones {
            return None;
        }
        // The last block whose preceding ones do not exceed n contains the n-th one.
        let block_index = partition_point(self.blocks.len(), |i| self.ranks[i] <= n) - 1;
        let k = n - self.ranks[block_index];
        let bit_offset = select1_in_block(self.blocks[block_index], k as u32);
        Some((block_index << Block::BIT_WIDTH) + bit_offset as usize)
    }

    fn select0(&self, n: usize) -> Option<usize> {
        if n >= self.num_zeros() {
            return None;
        }
        let block_index =
            partition_point(self.blocks.len(), |i| self.zeros_before_block(i) <= n) - 1;
        let k = n - self.zeros_before_block(block_index);
        // Bits beyond `len` flip to ones here, but the n-th zero lies before them.
        let bit_offset = select1_in_block(!self.blocks[block_index], k as u32);
        Some((block_index << Block::BIT_WIDTH) + bit_offset as usize)
    }

    fn get(&self, index: usize) -> bool {
        assert!(index < self.len, "out of bounds");
        let (block_index, bit_offset) = Block::index_offset(index);
        (self.blocks[block_index] >> bit_offset) & 1 == 1
    }

    fn num_ones(&self) -> usize {
        self.num_ones
    }

    fn num_zeros(&self) -> usize {
        self.len - self.num_ones
    }

    fn len(&self) -> usize {
        self.len
    }
}
