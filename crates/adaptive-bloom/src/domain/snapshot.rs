//! Snapshot encoding for adaptive filter state
//!
//! Layout, repeated once per filter (oldest first), all integers big-endian:
//!
//! ```text
//! +-----------+----------------+-----------+------------------------+
//! | size: u32 | num_hashes:u32 | count:u32 | bits: ceil(size/8) B   |
//! +-----------+----------------+-----------+------------------------+
//! ```
//!
//! Encoding only. Where the bytes go is the caller's business.

use super::adaptive::AdaptiveBloomFilter;
use super::bloom_filter::FixedBloomFilter;
use super::config::AdaptiveBloomConfig;
use crate::error::SnapshotError;

/// Bytes in each per-filter header
pub const HEADER_LEN: usize = 12;

fn to_u32(field: &'static str, value: usize) -> Result<u32, SnapshotError> {
    u32::try_from(value).map_err(|_| SnapshotError::FieldOverflow { field, value })
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_be_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Encode every filter back-to-back
pub fn encode(filter: &AdaptiveBloomFilter) -> Result<Vec<u8>, SnapshotError> {
    let capacity = filter
        .filters()
        .iter()
        .map(|f| HEADER_LEN + f.byte_len())
        .sum();
    let mut out = Vec::with_capacity(capacity);

    for f in filter.filters() {
        out.extend_from_slice(&to_u32("size", f.size_bits())?.to_be_bytes());
        out.extend_from_slice(&to_u32("num_hashes", f.hash_count())?.to_be_bytes());
        out.extend_from_slice(&to_u32("count", f.count())?.to_be_bytes());
        out.extend_from_slice(f.as_bytes());
    }

    Ok(out)
}

/// Decode a snapshot produced by [`encode`]
///
/// `config` supplies the growth policy, which is not part of the encoding.
pub fn decode(
    config: AdaptiveBloomConfig,
    data: &[u8],
) -> Result<AdaptiveBloomFilter, SnapshotError> {
    if data.is_empty() {
        return Err(SnapshotError::Empty);
    }

    let mut filters = Vec::new();
    let mut offset = 0;

    while offset < data.len() {
        let available = data.len() - offset;
        if available < HEADER_LEN {
            return Err(SnapshotError::Truncated {
                offset,
                needed: HEADER_LEN,
                available,
            });
        }

        let size = read_u32(data, offset) as usize;
        let num_hashes = read_u32(data, offset + 4) as usize;
        let count = read_u32(data, offset + 8) as usize;
        offset += HEADER_LEN;

        let byte_len = size.div_ceil(8);
        let available = data.len() - offset;
        if available < byte_len {
            return Err(SnapshotError::Truncated {
                offset,
                needed: byte_len,
                available,
            });
        }

        let bytes = data[offset..offset + byte_len].to_vec();
        filters.push(FixedBloomFilter::from_parts(size, num_hashes, count, bytes)?);
        offset += byte_len;
    }

    Ok(AdaptiveBloomFilter::from_filters(config, filters)?)
}
