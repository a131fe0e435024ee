// Length index storing lengths directly as the values of a prefix sum,
// avoiding the bit expansion of unary coding. Appends are O(1) and the
// inverse offset lookup is a binary search over the cumulative sum samples.

use bit_structures::PrefixSum;

use crate::length_index::{CharIndex, LengthIndex};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSumIndex {
    lens: PrefixSum,
}

impl PrefixSumIndex {
    pub fn new() -> Self {
        Self::default()
    }
}

impl bincode::Encode for PrefixSumIndex {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> core::result::Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.lens, encoder)
    }
}

impl bincode::Decode for PrefixSumIndex {
    fn decode<D: bincode::de::Decoder>(
        decoder: &mut D,
    ) -> core::result::Result<Self, bincode::error::DecodeError> {
        Ok(Self {
            lens: bincode::Decode::decode(decoder)?,
        })
    }
}

impl LengthIndex for PrefixSumIndex {
    fn num(&self) -> usize {
        self.lens.num()
    }

    fn total_len(&self) -> usize {
        self.lens.total_sum()
    }

    fn len_and_offset(&self, ind: usize) -> Option<(usize, usize)> {
        self.lens.value_and_prefix_sum(ind)
    }

    fn push_back(&mut self, len: usize) {
        self.lens.inc_tail(self.lens.num(), len);
    }
}

impl CharIndex for PrefixSumIndex {
    fn ith_char_index(&self, offset: usize) -> Option<usize> {
        self.lens.find_by_sum(offset)
    }
}
