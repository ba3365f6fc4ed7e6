//! Inbound Ports (Driving Ports)
//!
//! The API that request handlers use to check and register identifiers.

use async_trait::async_trait;

use crate::error::MembershipError;

/// How an availability answer was reached
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resolution {
    /// The filter ruled the identifier out; no directory round-trip
    FilterMiss,
    /// The filter hit and the directory confirmed the registration
    Confirmed,
    /// The filter hit but the directory had no such identifier
    FalsePositive,
}

/// Result of an availability check
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CheckOutcome {
    /// Normalised identifier that was checked
    pub identifier: String,
    /// Whether the identifier can be registered
    pub available: bool,
    pub resolution: Resolution,
    /// Alternatives offered when the identifier is taken
    pub suggestions: Vec<String>,
}

impl CheckOutcome {
    /// Whether answering required a directory round-trip
    pub fn consulted_directory(&self) -> bool {
        self.resolution != Resolution::FilterMiss
    }
}

/// Point-in-time view of the filter
#[derive(Clone, Debug, PartialEq)]
pub struct FilterStats {
    pub filter_count: usize,
    pub epoch: usize,
    pub total_items: usize,
    pub total_bits: usize,
    pub current_size_bits: usize,
    pub current_hash_count: usize,
    pub current_fpr: f64,
    pub target_fpr: f64,
}

/// Membership API (Driving Port)
#[async_trait]
pub trait MembershipApi: Send + Sync {
    /// Check whether an identifier is available
    ///
    /// A filter miss answers immediately. A filter hit is confirmed against
    /// the directory before the identifier is reported as taken.
    async fn check(&self, raw: &str) -> Result<CheckOutcome, MembershipError>;

    /// Register an identifier
    ///
    /// The directory write happens first; the filter is updated only after
    /// the identifier is persisted.
    async fn register(&self, raw: &str) -> Result<(), MembershipError>;

    /// Raw filter answer for an already-normalised identifier
    fn might_contain(&self, identifier: &str) -> bool;

    fn stats(&self) -> FilterStats;
}
