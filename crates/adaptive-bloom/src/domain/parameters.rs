//! Bloom filter capacity planning
//!
//! Formulas:
//! - m = ceil(-n*ln(p) / (ln(2)^2))  -- optimal bits
//! - k = round((m/n) * ln(2))        -- optimal hash functions
//! - p = (1 - e^(-kn/m))^k           -- estimated false positive rate

use bitvec::prelude::*;
use std::f64::consts::LN_2;

use super::config::AdaptiveBloomConfig;

/// Largest bit array a single filter can allocate
pub const MAX_FILTER_BITS: usize = BitSlice::<u8, Lsb0>::MAX_BITS;

/// Size and hash count for one fixed filter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FilterParams {
    /// Number of bits (m)
    pub size_bits: usize,
    /// Number of probe positions per item (k)
    pub hash_count: usize,
}

/// Optimal number of bits for `n` items at false positive rate `p`
pub fn optimal_size_bits(n: usize, p: f64) -> usize {
    (-(n as f64) * p.ln() / (LN_2 * LN_2)).ceil() as usize
}

/// Optimal number of hash functions for `m` bits holding `n` items
///
/// Never less than 1; a zero `n` is treated as a single item.
pub fn optimal_hash_count(m: usize, n: f64) -> usize {
    let n = if n > 0.0 { n } else { 1.0 };
    ((m as f64 / n) * LN_2).round().max(1.0) as usize
}

/// Estimated false positive rate after `n` insertions
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}

/// Parameters of the first filter for a validated configuration
pub fn initial_parameters(config: &AdaptiveBloomConfig) -> FilterParams {
    let size_bits = optimal_size_bits(config.expected_items, config.target_fpr).max(1);
    FilterParams {
        size_bits,
        hash_count: optimal_hash_count(size_bits, config.expected_items as f64),
    }
}

/// Parameters of the filter that replaces a saturated one
///
/// The new filter has `growth_factor` times the bits, and its hash count is
/// re-derived assuming `count * growth_factor` expected items. The size is
/// capped at [`MAX_FILTER_BITS`].
pub fn grown_parameters(size_bits: usize, count: usize, growth_factor: f64) -> FilterParams {
    let new_size = ((size_bits as f64 * growth_factor).ceil() as usize).min(MAX_FILTER_BITS);
    let new_expected = count as f64 * growth_factor;
    FilterParams {
        size_bits: new_size,
        hash_count: optimal_hash_count(new_size, new_expected),
    }
}
