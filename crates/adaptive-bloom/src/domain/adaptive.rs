//! Adaptive Bloom filter (growth manager)
//!
//! Owns an append-only list of [`FixedBloomFilter`]s. Writes go to the newest
//! filter; reads are the OR across all of them. After every write, if the
//! newest filter's estimated false positive rate exceeds the target, a larger
//! filter is appended and becomes the write target. Old filters are never
//! rebuilt or removed.
//!
//! INVARIANTS:
//! - `filters` is never empty and only grows
//! - Every added item lives in exactly one filter, so there are no false
//!   negatives across the whole structure

use tracing::warn;

use super::bloom_filter::FixedBloomFilter;
use super::config::AdaptiveBloomConfig;
use super::parameters::{grown_parameters, initial_parameters};
use crate::error::FilterError;

/// Record of one epoch transition
#[derive(Clone, Debug, PartialEq)]
pub struct GrowthEvent {
    /// Index of the newly appended filter
    pub epoch: usize,
    /// Size of the filter that saturated
    pub previous_size: usize,
    /// Items in the filter that saturated
    pub previous_count: usize,
    /// FPR estimate that triggered growth
    pub observed_fpr: f64,
    /// Size of the new write target
    pub new_size: usize,
    /// Hash count of the new write target
    pub new_hash_count: usize,
}

/// Self-growing Bloom filter with a bounded false positive rate
#[derive(Clone, Debug)]
pub struct AdaptiveBloomFilter {
    config: AdaptiveBloomConfig,
    filters: Vec<FixedBloomFilter>,
}

impl AdaptiveBloomFilter {
    /// Create a filter sized for `config.expected_items` at `config.target_fpr`
    pub fn new(config: AdaptiveBloomConfig) -> Result<Self, FilterError> {
        config.validate()?;
        let params = initial_parameters(&config);
        let first = FixedBloomFilter::new(params.size_bits, params.hash_count)?;

        Ok(Self {
            config,
            filters: vec![first],
        })
    }

    /// Rebuild from previously captured filters, oldest first
    pub fn from_filters(
        config: AdaptiveBloomConfig,
        filters: Vec<FixedBloomFilter>,
    ) -> Result<Self, FilterError> {
        config.validate()?;
        if filters.is_empty() {
            return Err(FilterError::EmptyFilterSet);
        }
        Ok(Self { config, filters })
    }

    /// Add an item to the current write target
    ///
    /// Returns the growth event if this insertion saturated the target.
    pub fn add(&mut self, item: &str) -> Option<GrowthEvent> {
        let last = self.filters.len() - 1;
        let current = &mut self.filters[last];
        current.add(item);

        let observed_fpr = current.estimate_false_positive_rate();
        if observed_fpr <= self.config.target_fpr {
            return None;
        }

        let (previous_size, previous_count) = (current.size_bits(), current.count());
        let params = grown_parameters(previous_size, previous_count, self.config.growth_factor);
        self.filters
            .push(FixedBloomFilter::zeroed(params.size_bits, params.hash_count));

        let event = GrowthEvent {
            epoch: self.filters.len() - 1,
            previous_size,
            previous_count,
            observed_fpr,
            new_size: params.size_bits,
            new_hash_count: params.hash_count,
        };

        warn!(
            epoch = event.epoch,
            observed_fpr = event.observed_fpr,
            target_fpr = self.config.target_fpr,
            previous_count = event.previous_count,
            new_size = event.new_size,
            new_hash_count = event.new_hash_count,
            "False positive rate above target, growing filter"
        );

        Some(event)
    }

    /// Test if an item might have been added to any filter
    pub fn contains(&self, item: &str) -> bool {
        self.filters.iter().any(|filter| filter.contains(item))
    }

    /// All filters, oldest first
    pub fn filters(&self) -> &[FixedBloomFilter] {
        &self.filters
    }

    /// The current write target
    pub fn current(&self) -> &FixedBloomFilter {
        // filters is never empty
        &self.filters[self.filters.len() - 1]
    }

    /// Index of the current write target
    pub fn epoch(&self) -> usize {
        self.filters.len() - 1
    }

    pub fn filter_count(&self) -> usize {
        self.filters.len()
    }

    /// Total add calls across all filters
    pub fn total_count(&self) -> usize {
        self.filters.iter().map(FixedBloomFilter::count).sum()
    }

    /// Total bits allocated across all filters
    pub fn total_bits(&self) -> usize {
        self.filters.iter().map(FixedBloomFilter::size_bits).sum()
    }

    /// FPR estimate of the current write target
    pub fn current_false_positive_rate(&self) -> f64 {
        self.current().estimate_false_positive_rate()
    }

    pub fn target_fpr(&self) -> f64 {
        self.config.target_fpr
    }

    pub fn growth_factor(&self) -> f64 {
        self.config.growth_factor
    }

    pub fn config(&self) -> &AdaptiveBloomConfig {
        &self.config
    }
}
