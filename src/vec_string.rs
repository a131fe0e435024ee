// A vector of variable-length byte strings stored as one concatenated buffer.
// The length and offset of each string are recovered from a LengthIndex rather
// than stored explicitly, so for the unary index the metadata costs roughly
// num * (2 + log2(total_len / num)) / 8 bytes on top of the string bytes.

use std::fmt;
use std::ops::Range;

use bit_structures::bincode_helpers::{config, decode_bytes};
use log::{debug, warn};

use crate::error::{Error, Result};
use crate::length_index::{CharIndex, LengthIndex};
use crate::prefix_sum_index::PrefixSumIndex;
use crate::unary_index::UnaryIndex;

/// Append-only vector of byte strings V[0..num).
#[derive(Clone, Default)]
pub struct VecString<L: LengthIndex = PrefixSumIndex> {
    index: L,
    bytes: Vec<u8>,
}

pub type UnaryVecString = VecString<UnaryIndex>;
pub type PrefixSumVecString = VecString<PrefixSumIndex>;

impl<L: LengthIndex> VecString<L> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of strings
    pub fn num(&self) -> usize {
        self.index.num()
    }

    /// Total length of all strings in bytes
    pub fn total_len(&self) -> usize {
        self.index.total_len()
    }

    pub fn is_empty(&self) -> bool {
        self.num() == 0
    }

    /// Returns the length of V[ind] and the total length of V[0..ind).
    pub fn len_and_offset(&self, ind: usize) -> Result<(usize, usize)> {
        self.index
            .len_and_offset(ind)
            .ok_or_else(|| self.index_out_of_range(ind))
    }

    /// Byte range of V[ind] within the buffer.
    fn range(&self, ind: usize) -> Result<Range<usize>> {
        let (len, offset) = self
            .index
            .len_and_offset_scan(ind)
            .ok_or_else(|| self.index_out_of_range(ind))?;
        Ok(offset..offset + len)
    }

    fn index_out_of_range(&self, ind: usize) -> Error {
        Error::IndexOutOfRange {
            index: ind,
            len: self.num(),
        }
    }

    /// Returns V[ind].
    pub fn get(&self, ind: usize) -> Result<&[u8]> {
        let range = self.range(ind)?;
        Ok(&self.bytes[range])
    }

    /// Returns the byte at `offset` in the concatenation of all strings.
    pub fn get_byte(&self, offset: usize) -> Result<u8> {
        self.bytes
            .get(offset)
            .copied()
            .ok_or(Error::IndexOutOfRange {
                index: offset,
                len: self.bytes.len(),
            })
    }

    /// Whether the byte `c` occurs in V[ind].
    pub fn find(&self, ind: usize, c: u8) -> Result<bool> {
        Ok(self.get(ind)?.contains(&c))
    }

    /// Finds the first occurrence of `c` in V[ind] and returns its offset in the
    /// concatenation of all strings.
    pub fn find_with_offset(&self, ind: usize, c: u8) -> Result<Option<usize>> {
        let range = self.range(ind)?;
        let start = range.start;
        Ok(self.bytes[range]
            .iter()
            .position(|&b| b == c)
            .map(|i| start + i))
    }

    /// Whether V[ind] == s.
    pub fn exact_match(&self, ind: usize, s: impl AsRef<[u8]>) -> Result<bool> {
        let s = s.as_ref();
        let range = self.range(ind)?;
        if range.len() != s.len() {
            return Ok(false);
        }
        Ok(&self.bytes[range] == s)
    }

    /// Compares V[ind] with `s` from the start. Returns `(V[ind].len(), true)` if
    /// V[ind] is a prefix of `s`, and otherwise `(k, false)` where `k` is the
    /// length of their longest common prefix.
    pub fn prefix_match(&self, ind: usize, s: impl AsRef<[u8]>) -> Result<(usize, bool)> {
        let v = self.get(ind)?;
        let common = v
            .iter()
            .zip(s.as_ref())
            .take_while(|(a, b)| a == b)
            .count();
        Ok((common, common == v.len()))
    }

    /// Appends `s` as V[num].
    pub fn push_back(&mut self, s: impl AsRef<[u8]>) {
        let s = s.as_ref();
        // Reserve first so that extending the buffer cannot fail once the
        // index has recorded the new length.
        self.bytes.reserve(s.len());
        self.index.push_back(s.len());
        self.bytes.extend_from_slice(s);
    }

    /// Iterates over the strings in order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> + '_ {
        (0..self.num())
            .map(move |ind| self.get(ind).expect("every index below num has a length and offset"))
    }

    /// The concatenation of all strings.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Encodes the vector into its binary form.
    pub fn marshal(&self) -> Result<Vec<u8>> {
        let data = bincode::encode_to_vec(self, config())?;
        debug!(
            "encoded vec string: {} strings, {} string bytes, {} bytes total",
            self.num(),
            self.total_len(),
            data.len()
        );
        Ok(data)
    }

    /// Decodes a vector from the binary form produced by `marshal`.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        let (vs, read): (Self, usize) =
            bincode::decode_from_slice(data, config()).map_err(|err| {
                warn!("rejected vec string of {} bytes: {}", data.len(), err);
                err
            })?;
        if read != data.len() {
            let remaining = data.len() - read;
            warn!("rejected vec string with {} trailing bytes", remaining);
            return Err(Error::TrailingBytes { remaining });
        }
        debug!(
            "decoded vec string: {} strings, {} string bytes",
            vs.num(),
            vs.total_len()
        );
        Ok(vs)
    }

    /// Replaces the contents of this vector with the one encoded in `data`.
    /// On error the vector is left unchanged.
    pub fn unmarshal(&mut self, data: &[u8]) -> Result<()> {
        *self = Self::from_bytes(data)?;
        Ok(())
    }
}

impl<L: CharIndex> VecString<L> {
    /// Returns the index of the string containing the byte at the 0-based
    /// `offset` in the concatenation of all strings, so that for the result
    /// `ind` with `(len, start) = len_and_offset(ind)`,
    /// `start <= offset < start + len`. Empty strings are never returned.
    pub fn ith_char_index(&self, offset: usize) -> Result<usize> {
        self.index
            .ith_char_index(offset)
            .ok_or(Error::IndexOutOfRange {
                index: offset,
                len: self.total_len(),
            })
    }
}

impl<L: LengthIndex> bincode::Encode for VecString<L> {
    fn encode<E: bincode::enc::Encoder>(
        &self,
        encoder: &mut E,
    ) -> core::result::Result<(), bincode::error::EncodeError> {
        bincode::Encode::encode(&self.index, encoder)?;
        bincode::Encode::encode(&self.bytes, encoder)?;
        Ok(())
    }
}

impl<L: LengthIndex> bincode::Decode for VecString<L> {
    fn decode<D: bincode::de::Decoder>(
        decoder: &mut D,
    ) -> core::result::Result<Self, bincode::error::DecodeError> {
        let index: L = bincode::Decode::decode(decoder)?;
        let bytes = decode_bytes(decoder)?;
        if index.total_len() != bytes.len() {
            return Err(bincode::error::DecodeError::Other(
                "vec string: buffer length does not match the length index",
            ));
        }
        Ok(Self { index, bytes })
    }
}

impl<L: LengthIndex> fmt::Debug for VecString<L> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list()
            .entries(self.iter().map(String::from_utf8_lossy))
            .finish()
    }
}

impl<L: LengthIndex, M: LengthIndex> PartialEq<VecString<M>> for VecString<L> {
    fn eq(&self, other: &VecString<M>) -> bool {
        self.num() == other.num() && self.bytes == other.bytes && self.iter().eq(other.iter())
    }
}

impl<L: LengthIndex> Eq for VecString<L> {}

impl<L: LengthIndex, S: AsRef<[u8]>> Extend<S> for VecString<L> {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        for s in iter {
            self.push_back(s);
        }
    }
}

impl<L: LengthIndex, S: AsRef<[u8]>> FromIterator<S> for VecString<L> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut vs = Self::new();
        vs.extend(iter);
        vs
    }
}
