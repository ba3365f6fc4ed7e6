//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - MurmurHash3 and probe-position derivation
//! - Fixed-capacity Bloom filter
//! - Adaptive (growing) Bloom filter
//! - Capacity planning formulas
//! - Configuration
//! - Snapshot encoding
//!
//! RULES:
//! - No I/O operations
//! - No async code
//! - Pure functions where possible

pub mod adaptive;
pub mod bloom_filter;
pub mod config;
pub mod hash_functions;
pub mod parameters;
pub mod snapshot;

pub use adaptive::{AdaptiveBloomFilter, GrowthEvent};
pub use bloom_filter::FixedBloomFilter;
pub use config::{AdaptiveBloomConfig, AdaptiveBloomConfigBuilder, MAX_GROWTH_FACTOR};
pub use hash_functions::{base_hashes, murmur3_32, murmur3_32_bytes, probe_positions};
pub use parameters::{calculate_fpr, FilterParams, MAX_FILTER_BITS};
