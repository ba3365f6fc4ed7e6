//! Metrics hooks for membership operations
//!
//! Counters for filter writes, lookups, growth, and how often a filter hit
//! had to be settled by the authoritative directory.
//!
//! ## Usage
//!
//! ```
//! use adaptive_bloom::metrics::Metrics;
//! use std::time::Duration;
//!
//! let metrics = Metrics::new();
//! metrics.record_lookup(Duration::from_nanos(120), false);
//! assert_eq!(metrics.snapshot().lookups_performed, 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

/// Thread-safe counters for membership operations
#[derive(Default)]
pub struct Metrics {
    /// Items added to the filter
    pub items_added: AtomicU64,
    /// Filter lookups performed
    pub lookups_performed: AtomicU64,
    /// Lookups where the filter answered "might exist"
    pub lookups_positive: AtomicU64,
    /// Filters appended by growth
    pub growth_events: AtomicU64,
    /// Lookups forwarded to the directory
    pub authoritative_checks: AtomicU64,
    /// Filter hits the directory did not confirm
    pub false_positives_recovered: AtomicU64,
    /// Cumulative lookup time in nanoseconds
    pub lookup_time_ns: AtomicU64,
    /// Cumulative insert time in nanoseconds
    pub insert_time_ns: AtomicU64,
}

impl Metrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_insert(&self, duration: Duration) {
        self.items_added.fetch_add(1, Ordering::Relaxed);
        self.insert_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
    }

    /// Record a filter lookup; `found` may be a false positive
    pub fn record_lookup(&self, duration: Duration, found: bool) {
        self.lookups_performed.fetch_add(1, Ordering::Relaxed);
        self.lookup_time_ns
            .fetch_add(duration.as_nanos() as u64, Ordering::Relaxed);
        if found {
            self.lookups_positive.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn record_growth(&self) {
        self.growth_events.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a directory check after a filter hit
    pub fn record_authoritative_check(&self, confirmed: bool) {
        self.authoritative_checks.fetch_add(1, Ordering::Relaxed);
        if !confirmed {
            self.false_positives_recovered
                .fetch_add(1, Ordering::Relaxed);
        }
    }

    /// Get current metrics snapshot
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            items_added: self.items_added.load(Ordering::Relaxed),
            lookups_performed: self.lookups_performed.load(Ordering::Relaxed),
            lookups_positive: self.lookups_positive.load(Ordering::Relaxed),
            growth_events: self.growth_events.load(Ordering::Relaxed),
            authoritative_checks: self.authoritative_checks.load(Ordering::Relaxed),
            false_positives_recovered: self.false_positives_recovered.load(Ordering::Relaxed),
            avg_lookup_ns: self.avg_lookup_time_ns(),
            avg_insert_ns: self.avg_insert_time_ns(),
        }
    }

    pub fn avg_lookup_time_ns(&self) -> u64 {
        let total = self.lookup_time_ns.load(Ordering::Relaxed);
        let count = self.lookups_performed.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    pub fn avg_insert_time_ns(&self) -> u64 {
        let total = self.insert_time_ns.load(Ordering::Relaxed);
        let count = self.items_added.load(Ordering::Relaxed);
        if count > 0 {
            total / count
        } else {
            0
        }
    }

    /// Ratio of positive lookups to all lookups
    ///
    /// Includes true positives as well as false positives.
    pub fn observed_positive_rate(&self) -> f64 {
        let total = self.lookups_performed.load(Ordering::Relaxed);
        let positive = self.lookups_positive.load(Ordering::Relaxed);
        if total > 0 {
            positive as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Point-in-time metrics snapshot
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MetricsSnapshot {
    pub items_added: u64,
    pub lookups_performed: u64,
    pub lookups_positive: u64,
    pub growth_events: u64,
    pub authoritative_checks: u64,
    pub false_positives_recovered: u64,
    pub avg_lookup_ns: u64,
    pub avg_insert_ns: u64,
}

/// Trait for custom metrics recording implementations
///
/// Implement this to forward counters to an external metrics system.
pub trait MetricsRecorder: Send + Sync {
    fn record_insert(&self, duration: Duration);

    fn record_lookup(&self, duration: Duration, found: bool);

    fn record_growth(&self);

    fn record_authoritative_check(&self, confirmed: bool);
}

/// No-op metrics recorder for when metrics are disabled
#[derive(Default)]
pub struct NoOpMetrics;

impl MetricsRecorder for NoOpMetrics {
    fn record_insert(&self, _: Duration) {}
    fn record_lookup(&self, _: Duration, _: bool) {}
    fn record_growth(&self) {}
    fn record_authoritative_check(&self, _: bool) {}
}

impl MetricsRecorder for Metrics {
    fn record_insert(&self, duration: Duration) {
        Metrics::record_insert(self, duration);
    }

    fn record_lookup(&self, duration: Duration, found: bool) {
        Metrics::record_lookup(self, duration, found);
    }

    fn record_growth(&self) {
        Metrics::record_growth(self);
    }

    fn record_authoritative_check(&self, confirmed: bool) {
        Metrics::record_authoritative_check(self, confirmed);
    }
}
