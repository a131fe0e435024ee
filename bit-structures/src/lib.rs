//! Succinct building blocks: an appendable rank/select dictionary and an
//! appendable prefix sum, both serializable with bincode.

pub mod bincode_helpers;
pub mod bit_block;
pub mod bit_vec;
pub mod prefix_sum;
pub mod rank_select_dict;
#[cfg(test)]
mod slice_bit_vec;
pub mod utils;

pub use bit_vec::BitVec;
pub use prefix_sum::PrefixSum;
pub use rank_select_dict::RankSelectDict;
