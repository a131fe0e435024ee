// Appendable sequence of non-negative integers with prefix sum queries.
// Every SAMPLE_RATE-th position stores a sample of the sum of all preceding values,
// so a prefix sum is one sample lookup plus a bounded scan within a sample block,
// and the inverse (sum -> index) lookup is a binary search over the samples.

use crate::bincode_helpers::{bincode_decode_impl, bincode_encode_impl};
use crate::utils::partition_point;

// Power of 2 of the sampling rate: take a sample every 2^SAMPLE_POW2 values
const SAMPLE_POW2: u32 = 6;
const SAMPLE_RATE: usize = 1 << SAMPLE_POW2;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrefixSum {
    values: Vec<usize>,
    // samples[i] is the sum of all values before the (i * SAMPLE_RATE)-th value
    samples: Vec<usize>,
    // sum of all values
    total: usize,
}

impl bincode::Encode for PrefixSum {
    bincode_encode_impl!(values, samples, total);
}
impl bincode::Decode for PrefixSum {
    bincode_decode_impl!(values, samples, total);
}

impl PrefixSum {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of values
    pub fn num(&self) -> usize {
        self.values.len()
    }

    /// Sum of all values
    pub fn total_sum(&self) -> usize {
        self.total
    }

    /// Append `value` as the new last element.
    pub fn push(&mut self, value: usize) {
        if self.values.len() % SAMPLE_RATE == 0 {
            self.samples.push(self.total);
        }
        self.values.push(value);
        self.total += value;
    }

    /// Add `delta` to the value at `index`, which must be either the last
    /// element or one past it; in the latter case a new element is appended.
    pub fn inc_tail(&mut self, index: usize, delta: usize) {
        let num = self.num();
        assert!(
            index == num || index + 1 == num,
            "only the tail of a prefix sum may grow"
        );
        if index == num {
            self.push(delta);
        } else {
            self.values[index] += delta;
            self.total += delta;
        }
    }

    pub fn get(&self, index: usize) -> Option<usize> {
        self.values.get(index).copied()
    }

    /// The value at `index` together with the sum of all values before it.
    pub fn value_and_prefix_sum(&self, index: usize) -> Option<(usize, usize)> {
        let value = self.get(index)?;
        let sample_index = index >> SAMPLE_POW2;
        let block_start = sample_index << SAMPLE_POW2;
        let within_block: usize = self.values[block_start..index].iter().sum();
        let sum = self.samples[sample_index] + within_block;
        Some((value, sum))
    }

    /// Index of the value whose span `sum..sum + value`, where
    /// `(value, sum) = value_and_prefix_sum(i)`, contains `target`. Zero values have empty spans and are never returned.
    /// Returns None if `target >= total_sum()`.
    pub fn find_by_sum(&self, target: usize) -> Option<usize> {
        if target >= self.total {
            return None;
        }
        // The last sample at or below the target starts the block holding the answer.
        let sample_index = partition_point(self.samples.len(), |i| self.samples[i] <= target) - 1;
        let block_start = sample_index << SAMPLE_POW2;
        let mut sum = self.samples[sample_index];
        for (i, &value) in self.values[block_start..].iter().enumerate() {
            sum += value;
            if target < sum {
                return Some(block_start + i);
            }
        }
        None
    }

    /// Check that the samples and total agree with the values.
    fn validate(&self) -> Result<(), &'static str> {
        let expected_samples = self.values.len() / SAMPLE_RATE
            + usize::from(self.values.len() % SAMPLE_RATE > 0);
        if self.samples.len() != expected_samples {
            return Err("prefix sum: sample count does not match value count");
        }
        let mut sum: usize = 0;
        for (i, &value) in self.values.iter().enumerate() {
            if i % SAMPLE_RATE == 0 && self.samples[i >> SAMPLE_POW2] != sum {
                return Err("prefix sum: inconsistent sample");
            }
            sum = sum
                .checked_add(value)
                .ok_or("prefix sum: total overflows")?;
        }
        if sum != self.total {
            return Err("prefix sum: inconsistent total");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bincode_helpers::config;
    use rand::Rng;

    fn from_values(values: &[usize]) -> PrefixSum {
        let mut ps = PrefixSum::new();
        for &v in values {
            ps.push(v);
        }
        ps
    }

    #[test]
    fn test_empty() {
        let ps = PrefixSum::new();
        assert_eq!(ps.num(), 0);
        assert_eq!(ps.total_sum(), 0);
        assert_eq!(ps.value_and_prefix_sum(0), None);
        assert_eq!(ps.find_by_sum(0), None);
    }

    #[test]
    fn test_value_and_prefix_sum() {
        let ps = from_values(&[3, 2, 0, 4]);
        assert_eq!(ps.num(), 4);
        assert_eq!(ps.total_sum(), 9);
        assert_eq!(ps.value_and_prefix_sum(0), Some((3, 0)));
        assert_eq!(ps.value_and_prefix_sum(1), Some((2, 3)));
        assert_eq!(ps.value_and_prefix_sum(2), Some((0, 5)));
        assert_eq!(ps.value_and_prefix_sum(3), Some((4, 5)));
        assert_eq!(ps.value_and_prefix_sum(4), None);
    }

    #[test]
    fn test_find_by_sum_skips_zero_values() {
        let ps = from_values(&[0, 3, 0, 0, 2, 0]);
        let expected = [1, 1, 1, 4, 4];
        for (target, &index) in expected.iter().enumerate() {
            assert_eq!(ps.find_by_sum(target), Some(index));
        }
        assert_eq!(ps.find_by_sum(5), None);
    }

    #[test]
    fn test_inc_tail() {
        let mut ps = PrefixSum::new();
        ps.inc_tail(0, 3);
        ps.inc_tail(0, 2);
        ps.inc_tail(1, 0);
        ps.inc_tail(2, 4);
        assert_eq!(ps, from_values(&[5, 0, 4]));
    }

    #[test]
    #[should_panic]
    fn test_inc_tail_rejects_interior() {
        let mut ps = from_values(&[1, 2, 3]);
        ps.inc_tail(0, 1);
    }

    #[test]
    fn test_vs_naive_rand() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let num = rng.gen_range(1..1000);
            let values: Vec<usize> = (0..num).map(|_| rng.gen_range(0..10)).collect();
            let ps = from_values(&values);

            let mut sum = 0;
            for (i, &value) in values.iter().enumerate() {
                assert_eq!(ps.value_and_prefix_sum(i), Some((value, sum)));
                for target in sum..sum + value {
                    assert_eq!(ps.find_by_sum(target), Some(i));
                }
                sum += value;
            }
            assert_eq!(ps.total_sum(), sum);
            assert_eq!(ps.find_by_sum(sum), None);
        }
    }

    #[test]
    fn test_encode_decode() {
        let values: Vec<usize> = (0..200).map(|i| i % 7).collect();
        let ps = from_values(&values);
        let data = bincode::encode_to_vec(&ps, config()).unwrap();
        let (decoded, read): (PrefixSum, usize) =
            bincode::decode_from_slice(&data, config()).unwrap();
        assert_eq!(read, data.len());
        assert_eq!(decoded, ps);
    }

    #[test]
    fn test_decode_rejects_huge_length_prefix() {
        let ps = from_values(&[1, 2, 3]);
        let data = bincode::encode_to_vec(&ps, config()).unwrap();
        // layout is [values.len: u64][3 values][samples.len: u64][1 sample][total]
        for prefix in [0, 8 + 3 * 8] {
            for len in [1u64 << 40, u64::MAX / 2, u64::MAX] {
                let mut forged = data.clone();
                forged[prefix..prefix + 8].copy_from_slice(&len.to_le_bytes());
                let res: Result<(PrefixSum, usize), _> =
                    bincode::decode_from_slice(&forged, config());
                assert!(res.is_err(), "length {len} at byte {prefix}");
            }
        }
    }

    #[test]
    fn test_decode_rejects_inconsistent() {
        let ps = from_values(&[1, 2, 3]);
        let data = bincode::encode_to_vec(&ps, config()).unwrap();

        // total is the final fixed-width field
        let mut bad_total = data.clone();
        let last = bad_total.len() - 8;
        bad_total[last] += 1;
        let res: Result<(PrefixSum, usize), _> = bincode::decode_from_slice(&bad_total, config());
        assert!(res.is_err());

        let res: Result<(PrefixSum, usize), _> =
            bincode::decode_from_slice(&data[..data.len() - 1], config());
        assert!(res.is_err());
    }
}
