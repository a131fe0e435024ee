// Length index storing each length L in unary code: L 0-bits followed by a
// terminating 1-bit. A sentinel 1-bit written at construction precedes all
// strings, so for the i-th string (counting from 0):
// - the i-th 1-bit (the sentinel being the 0-th) immediately precedes its bytes
// - its offset is the number of 0-bits before that 1-bit, ie. position - i
// - its length is the number of 0-bits between the i-th and (i+1)-th 1-bits
// The bit vector therefore holds total_len + num + 1 bits, num + 1 of them ones.

use bit_structures::{BitVec, RankSelectDict};

use crate::length_index::{CharIndex, LengthIndex};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryIndex {
    bits: RankSelectDict,
}

impl UnaryIndex {
    pub fn new() -> Self {
        let mut bits = RankSelectDict::new();
        bits.push(true); // sentinel
        Self { bits }
    }

    /// The underlying unary-coded bit vector, sentinel included.
    pub fn bits(&self) -> &RankSelectDict {
        &self.bits
    }
}

impl Default for UnaryIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl bincode::Encode for UnaryIndex {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> core::result::Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.bits, encoder)
    }
}

impl bincode::Decode for UnaryIndex {
    fn decode<D: bincode::de::Decoder>(
        decoder: &mut D,
    ) -> core::result::Result<Self, bincode::error::DecodeError> {
        let bits: RankSelectDict = bincode::Decode::decode(decoder)?;
        if bits.is_empty() || !bits.get(0) {
            return Err(bincode::error::DecodeError::Other(
                "unary length index: missing sentinel bit",
            ));
        }
        if !bits.get(bits.len() - 1) {
            return Err(bincode::error::DecodeError::Other(
                "unary length index: unterminated length",
            ));
        }
        Ok(Self { bits })
    }
}

impl LengthIndex for UnaryIndex {
    fn num(&self) -> usize {
        self.bits.num_ones() - 1
    }

    fn total_len(&self) -> usize {
        self.bits.num_zeros()
    }

    fn len_and_offset(&self, ind: usize) -> Option<(usize, usize)> {
        if ind >= self.num() {
            return None;
        }
        let start = self.bits.select1(ind)?;
        let end = self.bits.select1(ind + 1)?;
        Some((end - start - 1, start - ind))
    }

    // Count the zeros after the ind-th 1-bit rather than selecting the next one.
    fn len_and_offset_scan(&self, ind: usize) -> Option<(usize, usize)> {
        if ind >= self.num() {
            return None;
        }
        let start = self.bits.select1(ind)?;
        Some((self.bits.run_of_zeros(start + 1), start - ind))
    }

    fn push_back(&mut self, len: usize) {
        self.bits.push_run(false, len);
        self.bits.push(true);
    }
}

impl CharIndex for UnaryIndex {
    fn ith_char_index(&self, offset: usize) -> Option<usize> {
        // The offset-th 0-bit is preceded by the sentinel plus one
        // terminator for every string that ends before it.
        let pos = self.bits.select0(offset)?;
        Some(self.bits.rank1(pos) - 1)
    }
}
