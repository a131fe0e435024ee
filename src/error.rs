use thiserror::Error;

/// Result type alias using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A string index at or beyond `num`, or a byte offset at or beyond `total_len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    /// Truncated, malformed, or internally inconsistent serialized input.
    #[error("decode error: {0}")]
    Decode(#[from] bincode::error::DecodeError),

    /// The input decoded cleanly but was followed by unread bytes.
    #[error("decode error: {remaining} trailing bytes")]
    TrailingBytes { remaining: usize },

    /// The vector could not be written out in its binary form.
    #[error("encode error: {0}")]
    Encode(#[from] bincode::error::EncodeError),
}

impl Error {
    /// Whether this error was produced while decoding serialized input.
    pub fn is_decode(&self) -> bool {
        matches!(self, Error::Decode(_) | Error::TrailingBytes { .. })
    }
}
