// Length indexes map a string index to the (length, offset) of its bytes in the
// concatenated buffer without storing an explicit pair per string.
// Two interchangeable encodings implement the same contract:
// - UnaryIndex: lengths in unary code inside a rank/select dictionary
// - PrefixSumIndex: lengths as values of a sampled prefix sum

/// Records the length of every appended string and resolves string indices
/// to byte ranges.
pub trait LengthIndex: Default + bincode::Encode + bincode::Decode {
    /// Number of strings recorded
    fn num(&self) -> usize;

    /// Total length of all strings recorded
    fn total_len(&self) -> usize;

    /// Returns `(length, offset)` of the `ind`-th string, where `offset` is the
    /// sum of the lengths of all strings before it. None if `ind >= num()`.
    fn len_and_offset(&self, ind: usize) -> Option<(usize, usize)>;

    /// Like `len_and_offset`, but may resolve the length with a scan proportional
    /// to it instead of a second lookup. Callers that go on to read the string's
    /// bytes pay that cost anyway.
    fn len_and_offset_scan(&self, ind: usize) -> Option<(usize, usize)> {
        self.len_and_offset(ind)
    }

    /// Record a new string of length `len`.
    fn push_back(&mut self, len: usize);
}

/// A length index that can also map a byte offset back to the string holding it.
pub trait CharIndex: LengthIndex {
    /// Index of the string whose byte range contains the absolute offset
    /// `offset`. None if `offset >= total_len()`.
    fn ith_char_index(&self, offset: usize) -> Option<usize>;
}
