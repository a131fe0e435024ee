//! Space-efficient, append-only vector of variable-length byte strings.
//!
//! Strings are concatenated into a single byte buffer and their lengths are
//! recorded in a [`LengthIndex`], which answers "what is the length and offset
//! of string i" without storing an explicit (offset, length) pair per string.
//!
//! ```
//! let mut vs = vec_string::new_with_char_index();
//! vs.push_back("abc");
//! vs.push_back("de");
//! vs.push_back("efgh");
//!
//! assert_eq!(vs.get(1).unwrap(), b"de");
//! assert_eq!(vs.get_byte(5).unwrap(), b'e');
//! assert_eq!(vs.prefix_match(2, "efghi").unwrap(), (4, true));
//! assert_eq!(vs.ith_char_index(4).unwrap(), 1);
//!
//! let data = vs.marshal().unwrap();
//! let decoded = vec_string::UnaryVecString::from_bytes(&data).unwrap();
//! assert_eq!(decoded, vs);
//! ```

pub mod error;
pub mod length_index;
pub mod prefix_sum_index;
pub mod unary_index;
pub mod vec_string;

pub use error::{Error, Result};
pub use length_index::{CharIndex, LengthIndex};
pub use prefix_sum_index::PrefixSumIndex;
pub use unary_index::UnaryIndex;
pub use vec_string::{PrefixSumVecString, UnaryVecString, VecString};

/// Returns an empty vector backed by a prefix sum length index.
pub fn new() -> PrefixSumVecString {
    VecString::new()
}

/// Returns an empty vector that also supports mapping a byte offset back to
/// its string with `ith_char_index`, backed by a unary-coded rank/select
/// length index.
pub fn new_with_char_index() -> UnaryVecString {
    VecString::new()
}
