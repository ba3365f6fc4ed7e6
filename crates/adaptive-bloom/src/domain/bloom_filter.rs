//! Fixed-capacity Bloom filter
//!
//! INVARIANTS:
//! - No false negatives: if added, contains() MUST return true
//! - Bits only transition 0 -> 1, and `count` never decreases
//! - The bit array is allocated once; its length never changes

use bitvec::prelude::*;

use super::hash_functions::probe_positions;
use super::parameters::calculate_fpr;
use crate::error::FilterError;

/// Bloom filter with a fixed number of bits and probes per item
///
/// Bits are stored least-significant-first inside each byte, so bit `pos`
/// lives in byte `pos / 8` at bit `pos % 8`.
#[derive(Clone, Debug)]
pub struct FixedBloomFilter {
    /// Bit array storing the filter state
    bits: BitVec<u8, Lsb0>,
    /// Size in bits (m)
    size: usize,
    /// Probe positions per item (k)
    num_hashes: usize,
    /// Number of add calls so far (n)
    count: usize,
}

impl FixedBloomFilter {
    /// Create an empty filter of `size` bits probed `num_hashes` times per item
    pub fn new(size: usize, num_hashes: usize) -> Result<Self, FilterError> {
        if size == 0 {
            return Err(FilterError::ZeroSize);
        }
        if num_hashes == 0 {
            return Err(FilterError::ZeroHashCount);
        }

        Ok(Self::zeroed(size, num_hashes))
    }

    /// Allocate without validation; callers guarantee both values are positive
    pub(crate) fn zeroed(size: usize, num_hashes: usize) -> Self {
        debug_assert!(size > 0 && num_hashes > 0);
        Self {
            bits: bitvec![u8, Lsb0; 0; size],
            size,
            num_hashes,
            count: 0,
        }
    }

    /// Rebuild a filter from its raw parts
    ///
    /// `bytes` must hold exactly `ceil(size / 8)` bytes.
    pub fn from_parts(
        size: usize,
        num_hashes: usize,
        count: usize,
        bytes: Vec<u8>,
    ) -> Result<Self, FilterError> {
        let mut filter = Self::new(size, num_hashes)?;
        let expected = filter.byte_len();
        if bytes.len() != expected {
            return Err(FilterError::BitArrayLength {
                expected,
                actual: bytes.len(),
            });
        }

        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(size);
        filter.bits = bits;
        filter.count = count;
        Ok(filter)
    }

    /// Add an item
    ///
    /// Re-adding an item leaves the bits unchanged but still increments
    /// `count`, which feeds the false positive estimate.
    pub fn add(&mut self, item: &str) {
        for pos in probe_positions(item, self.num_hashes, self.size) {
            self.bits.set(pos, true);
        }
        self.count += 1;
    }

    /// Test if an item might be in the filter
    ///
    /// Returns:
    /// - `true` if the item might be in the set (could be a false positive)
    /// - `false` if the item is definitely NOT in the set
    pub fn contains(&self, item: &str) -> bool {
        probe_positions(item, self.num_hashes, self.size).all(|pos| self.bits[pos])
    }

    /// Estimated false positive rate: (1 - e^(-kn/m))^k
    pub fn estimate_false_positive_rate(&self) -> f64 {
        calculate_fpr(self.size, self.count, self.num_hashes)
    }

    /// Filter size in bits (m)
    pub fn size_bits(&self) -> usize {
        self.size
    }

    /// Probe positions per item (k)
    pub fn hash_count(&self) -> usize {
        self.num_hashes
    }

    /// Number of add calls (n)
    pub fn count(&self) -> usize {
        self.count
    }

    /// Number of bits currently set
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Length of the backing byte array
    pub fn byte_len(&self) -> usize {
        self.size.div_ceil(8)
    }

    /// Backing bytes of the bit array
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_raw_slice()
    }
}
