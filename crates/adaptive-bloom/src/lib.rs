//! # Adaptive Bloom
//!
//! Identifier-availability checks fronted by a self-growing Bloom filter.
//!
//! ## Architecture
//!
//! This crate follows Hexagonal Architecture (Ports & Adapters):
//!
//! - **Domain Layer** (`domain/`): Pure filter logic, no I/O
//!   - `murmur3_32`: MurmurHash3 x86_32 over identifier strings
//!   - `FixedBloomFilter`: Fixed-size probabilistic set
//!   - `AdaptiveBloomFilter`: Appends larger filters as the FPR drifts up
//!   - `AdaptiveBloomConfig`: Configuration with validation
//!   - `snapshot`: Binary encoding of filter state
//!
//! - **Ports Layer** (`ports/`): Trait definitions
//!   - `MembershipApi`: Driving port (inbound API)
//!   - `UserDirectory`: Driven port (authoritative store)
//!
//! - **Service Layer** (`service/`): Orchestration
//!   - `MembershipService`: Implements `MembershipApi`
//!
//! - **Handler Layer** (`handler/`): Identifier rules and suggestions
//!
//! - **Adapters Layer** (`adapters/`): `InMemoryUserDirectory`
//!
//! ## Invariants
//!
//! - No false negatives: once added, `contains()` returns true forever
//! - Only the newest filter receives writes; older filters are frozen
//! - The newest filter's estimated FPR is at most the target after growth
//!
//! ## Usage Example
//!
//! ```
//! use adaptive_bloom::{AdaptiveBloomConfig, AdaptiveBloomFilter};
//!
//! let mut filter = AdaptiveBloomFilter::new(AdaptiveBloomConfig::default()).unwrap();
//! filter.add("alice");
//!
//! assert!(filter.contains("alice"));
//! assert_eq!(filter.filter_count(), 1);
//! ```

pub mod adapters;
pub mod domain;
pub mod error;
pub mod handler;
pub mod metrics;
pub mod ports;
pub mod service;

// Re-exports for convenience
pub use adapters::InMemoryUserDirectory;
pub use domain::{
    murmur3_32, AdaptiveBloomConfig, AdaptiveBloomConfigBuilder, AdaptiveBloomFilter,
    FixedBloomFilter, GrowthEvent,
};
pub use error::{DirectoryError, FilterError, IdentifierError, MembershipError, SnapshotError};
pub use handler::IdentifierHandler;
pub use metrics::{Metrics, MetricsRecorder, MetricsSnapshot, NoOpMetrics};
pub use ports::{CheckOutcome, FilterStats, MembershipApi, Resolution, UserDirectory};
pub use service::MembershipService;
