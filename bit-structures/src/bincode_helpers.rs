// Helper macros for more concise bincode definitions.
// They need to be manually kept up to date with the type.
// > bincode_encode_impl!(blocks, ranks, len, num_ones);
// becomes
// > bincode::Encode::encode(&self.blocks, encoder)?;
// > bincode::Encode::encode(&self.ranks, encoder)?;
// > bincode::Encode::encode(&self.len, encoder)?;
// > bincode::Encode::encode(&self.num_ones, encoder)?;
macro_rules! bincode_encode_impl {
    ($($t:ident),* $(,)?) => (
        fn encode<E: bincode::enc::Encoder>(
            &self,
            encoder: &mut E,
        ) -> core::result::Result<(), bincode::error::EncodeError> {
            $(bincode::Encode::encode(&self.$t, encoder)?;)*
            Ok(())
        }
    )
}

// Decodes each field in order through `BoundedDecode`, then calls
// `self.validate()` so that structurally inconsistent input is rejected
// instead of producing a value whose derived fields disagree with its data.
// > bincode_decode_impl!(blocks, ranks, len, num_ones);
// becomes
// > let value = Self {
// >     blocks: BoundedDecode::bounded_decode(decoder)?,
// >     ...
// > };
// > value.validate().map_err(bincode::error::DecodeError::Other)?;
// > Ok(value)
macro_rules! bincode_decode_impl {
    ($($t:ident),* $(,)?) => (
        fn decode<D: bincode::de::Decoder>(
            decoder: &mut D,
        ) -> core::result::Result<Self, bincode::error::DecodeError> {
            let value = Self {
                $($t: crate::bincode_helpers::BoundedDecode::bounded_decode(decoder)?,)*
            };
            value.validate().map_err(bincode::error::DecodeError::Other)?;
            Ok(value)
        }
    )
}

pub(crate) use bincode_decode_impl;
pub(crate) use bincode_encode_impl;

use bincode::de::read::Reader;
use bincode::de::Decoder;
use bincode::error::DecodeError;
use bincode::Decode;

// Most memory reserved for a container before the input has supplied the data
// to fill it. Beyond this, containers grow only as elements are actually read,
// so a forged length prefix fails with a decode error once the input runs out.
const MAX_PREALLOC_BYTES: usize = 1 << 16;

/// Decoding that never allocates on the word of a length prefix alone.
/// Wire compatible with `bincode::Decode` for the same type.
pub trait BoundedDecode: Sized {
    fn bounded_decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError>;
}

macro_rules! bounded_decode_int_impl {
    ($($t:ty),*) => ($(
        impl BoundedDecode for $t {
            fn bounded_decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
                Decode::decode(decoder)
            }
        }
    )*)
}

bounded_decode_int_impl!(u8, u16, u32, u64, usize);

impl<T: BoundedDecode> BoundedDecode for Vec<T> {
    fn bounded_decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
        let len = decode_len(decoder)?;
        let prealloc = MAX_PREALLOC_BYTES / std::mem::size_of::<T>().max(1);
        let mut vec = Vec::with_capacity(len.min(prealloc));
        for _ in 0..len {
            vec.push(T::bounded_decode(decoder)?);
        }
        Ok(vec)
    }
}

/// Decodes a byte buffer written by `Encode for Vec<u8>`, reading it in
/// chunks so that memory use tracks the bytes actually present in the input.
pub fn decode_bytes<D: Decoder>(decoder: &mut D) -> Result<Vec<u8>, DecodeError> {
    let len = decode_len(decoder)?;
    let mut bytes = Vec::with_capacity(len.min(MAX_PREALLOC_BYTES));
    while bytes.len() < len {
        let start = bytes.len();
        let end = start + (len - start).min(MAX_PREALLOC_BYTES);
        bytes.resize(end, 0);
        decoder.reader().read(&mut bytes[start..])?;
    }
    Ok(bytes)
}

// Container lengths are written as a u64 ahead of the elements.
fn decode_len<D: Decoder>(decoder: &mut D) -> Result<usize, DecodeError> {
    let len: u64 = Decode::decode(decoder)?;
    usize::try_from(len).map_err(|_| DecodeError::OutsideUsizeRange(len))
}

/// The configuration shared by every encode/decode path in this crate.
pub fn config() -> impl bincode::config::Config {
    bincode::config::standard().with_fixed_int_encoding()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bytes(Vec<u8>);

    impl Decode for Bytes {
        fn decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
            decode_bytes(decoder).map(Bytes)
        }
    }

    struct Words(Vec<u64>);

    impl Decode for Words {
        fn decode<D: Decoder>(decoder: &mut D) -> Result<Self, DecodeError> {
            BoundedDecode::bounded_decode(decoder).map(Words)
        }
    }

    fn forged_len(len: u64, tail: usize) -> Vec<u8> {
        let mut data = len.to_le_bytes().to_vec();
        data.extend(std::iter::repeat(0).take(tail));
        data
    }

    #[test]
    fn test_matches_vec_encoding() {
        let bytes: Vec<u8> = (0..200_000u32).map(|i| i as u8).collect();
        let data = bincode::encode_to_vec(&bytes, config()).unwrap();
        let (decoded, read): (Bytes, usize) = bincode::decode_from_slice(&data, config()).unwrap();
        assert_eq!(read, data.len());
        assert_eq!(decoded.0, bytes);

        let words: Vec<u64> = (0..10_000).map(|i| i * 3).collect();
        let data = bincode::encode_to_vec(&words, config()).unwrap();
        let (decoded, read): (Words, usize) = bincode::decode_from_slice(&data, config()).unwrap();
        assert_eq!(read, data.len());
        assert_eq!(decoded.0, words);
    }

    #[test]
    fn test_huge_length_prefix() {
        for len in [1u64 << 40, u64::MAX / 2, u64::MAX] {
            let data = forged_len(len, 16);
            let res: Result<(Bytes, usize), _> = bincode::decode_from_slice(&data, config());
            assert!(res.is_err());
            let res: Result<(Words, usize), _> = bincode::decode_from_slice(&data, config());
            assert!(res.is_err());
        }
    }
}
