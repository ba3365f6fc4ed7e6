//! Hash functions for the membership filter
//!
//! MurmurHash3 (x86, 32-bit) from the `murmur3` crate, applied to a fixed
//! byte view of each identifier so that every implementation hashing the
//! same identifier lands on the same bits. Probe positions use double
//! hashing: h(i) = h1 + i * h2, where h2 is seeded with h1.

use std::io::Cursor;

/// MurmurHash3 x86_32 over raw bytes.
pub fn murmur3_32_bytes(bytes: &[u8], seed: u32) -> u32 {
    // Reading from an in-memory cursor cannot fail
    murmur3::murmur3_32(&mut Cursor::new(bytes), seed).unwrap_or(0)
}

/// MurmurHash3 x86_32 over a string identifier.
///
/// Each UTF-16 code unit contributes its low 8 bits as one byte, and the
/// length mixed into the finaliser is the number of code units. For ASCII
/// input this is exactly the byte hash of the string.
pub fn murmur3_32(key: &str, seed: u32) -> u32 {
    if key.is_ascii() {
        return murmur3_32_bytes(key.as_bytes(), seed);
    }
    let bytes: Vec<u8> = key.encode_utf16().map(|unit| unit as u8).collect();
    murmur3_32_bytes(&bytes, seed)
}

/// The two base hashes used for probing: `h1 = H(item, 0)`, `h2 = H(item, h1)`.
pub fn base_hashes(item: &str) -> (u32, u32) {
    let h1 = murmur3_32(item, 0);
    let h2 = murmur3_32(item, h1);
    (h1, h2)
}

/// Compute `num_hashes` probe positions in a `size`-bit array.
///
/// Position `i` is `(h1 + i * h2) mod size`, evaluated without wrap-around.
pub fn probe_positions(
    item: &str,
    num_hashes: usize,
    size: usize,
) -> impl Iterator<Item = usize> {
    let (h1, h2) = base_hashes(item);
    let (h1, h2, m) = (u128::from(h1), u128::from(h2), size as u128);
    (0..num_hashes as u128).map(move |i| ((h1 + i * h2) % m) as usize)
}
