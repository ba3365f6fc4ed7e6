//! Membership Service
//!
//! Fronts an authoritative [`UserDirectory`] with an [`AdaptiveBloomFilter`].
//! Most availability checks for unregistered identifiers are answered by the
//! filter alone; only filter hits reach the directory.
//!
//! INVARIANTS:
//! - The filter is a superset of the directory: every identifier the
//!   directory holds (via this service) has been added to the filter
//! - A filter hit is never reported as "taken" without directory confirmation

use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

use crate::domain::{snapshot, AdaptiveBloomConfig, AdaptiveBloomFilter};
use crate::error::{FilterError, MembershipError, SnapshotError};
use crate::handler::IdentifierHandler;
use crate::metrics::{MetricsRecorder, NoOpMetrics};
use crate::ports::{CheckOutcome, FilterStats, MembershipApi, Resolution, UserDirectory};

/// Membership service implementation
///
/// Implements the `MembershipApi` port using an injected directory.
pub struct MembershipService<D: UserDirectory> {
    /// Probabilistic front; writes (including growth) take the write lock
    filter: RwLock<AdaptiveBloomFilter>,
    /// Authoritative directory (driven port)
    directory: Arc<D>,
    metrics: Arc<dyn MetricsRecorder>,
    identifiers: IdentifierHandler,
}

impl<D: UserDirectory> MembershipService<D> {
    /// Create a service with an empty filter sized by `config`
    pub fn new(config: AdaptiveBloomConfig, directory: Arc<D>) -> Result<Self, FilterError> {
        Ok(Self::from_filter(AdaptiveBloomFilter::new(config)?, directory))
    }

    /// Create a service around an existing filter, e.g. one restored from a snapshot
    pub fn from_filter(filter: AdaptiveBloomFilter, directory: Arc<D>) -> Self {
        Self {
            filter: RwLock::new(filter),
            directory,
            metrics: Arc::new(NoOpMetrics),
            identifiers: IdentifierHandler::new(),
        }
    }

    /// Forward counters to `metrics`
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsRecorder>) -> Self {
        self.metrics = metrics;
        self
    }

    /// Bulk-load identifiers the directory already holds
    ///
    /// Names are normalised but not validated. Returns the number of growth
    /// events triggered while loading.
    pub fn seed<I, S>(&self, names: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = self.filter.write();
        let mut seeded = 0usize;
        let mut growths = 0usize;

        for name in names {
            let identifier = self.identifiers.normalize(name.as_ref());
            let start = Instant::now();
            let grew = filter.add(&identifier).is_some();
            self.metrics.record_insert(start.elapsed());
            if grew {
                self.metrics.record_growth();
                growths += 1;
            }
            seeded += 1;
        }

        info!(
            seeded,
            growths,
            filters = filter.filter_count(),
            "Seeded membership filter"
        );
        growths
    }

    /// Encode the current filter state
    pub fn snapshot(&self) -> Result<Vec<u8>, SnapshotError> {
        snapshot::encode(&self.filter.read())
    }

    /// The directory this service confirms against
    pub fn directory(&self) -> &Arc<D> {
        &self.directory
    }

    fn lookup(&self, identifier: &str) -> bool {
        let start = Instant::now();
        let found = self.filter.read().contains(identifier);
        self.metrics.record_lookup(start.elapsed(), found);
        found
    }

    fn add_to_filter(&self, identifier: &str) {
        let start = Instant::now();
        let growth = self.filter.write().add(identifier);
        self.metrics.record_insert(start.elapsed());

        if let Some(event) = growth {
            self.metrics.record_growth();
            info!(
                epoch = event.epoch,
                new_size = event.new_size,
                "Membership filter grew"
            );
        }
    }

    fn suggestions_for(&self, identifier: &str) -> Vec<String> {
        let filter = self.filter.read();
        self.identifiers
            .suggest_alternatives(identifier, |candidate| !filter.contains(candidate))
    }
}

#[async_trait]
impl<D: UserDirectory + 'static> MembershipApi for MembershipService<D> {
    async fn check(&self, raw: &str) -> Result<CheckOutcome, MembershipError> {
        let identifier = self.identifiers.validate(raw)?;

        if !self.lookup(&identifier) {
            debug!(identifier = %identifier, "Filter miss, identifier available");
            return Ok(CheckOutcome {
                identifier,
                available: true,
                resolution: Resolution::FilterMiss,
                suggestions: Vec::new(),
            });
        }

        let exists = self.directory.exists(&identifier).await?;
        self.metrics.record_authoritative_check(exists);

        if !exists {
            debug!(identifier = %identifier, "Filter false positive recovered by directory");
            return Ok(CheckOutcome {
                identifier,
                available: true,
                resolution: Resolution::FalsePositive,
                suggestions: Vec::new(),
            });
        }

        let suggestions = self.suggestions_for(&identifier);
        debug!(
            identifier = %identifier,
            suggestions = suggestions.len(),
            "Identifier taken"
        );
        Ok(CheckOutcome {
            identifier,
            available: false,
            resolution: Resolution::Confirmed,
            suggestions,
        })
    }

    async fn register(&self, raw: &str) -> Result<(), MembershipError> {
        let identifier = self.identifiers.validate(raw)?;

        let inserted = self.directory.insert(&identifier).await?;
        // Keep the filter a superset of the directory even for duplicates
        self.add_to_filter(&identifier);

        if !inserted {
            debug!(identifier = %identifier, "Identifier already registered");
            return Err(MembershipError::AlreadyRegistered(identifier));
        }

        debug!(identifier = %identifier, "Identifier registered");
        Ok(())
    }

    fn might_contain(&self, identifier: &str) -> bool {
        self.lookup(identifier)
    }

    fn stats(&self) -> FilterStats {
        let filter = self.filter.read();
        let current = filter.current();
        FilterStats {
            filter_count: filter.filter_count(),
            epoch: filter.epoch(),
            total_items: filter.total_count(),
            total_bits: filter.total_bits(),
            current_size_bits: current.size_bits(),
            current_hash_count: current.hash_count(),
            current_fpr: filter.current_false_positive_rate(),
            target_fpr: filter.target_fpr(),
        }
    }
}
