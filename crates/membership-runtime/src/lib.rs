//! # Membership Runtime
//!
//! Composition root for the membership service.
//!
//! ## Startup Sequence
//!
//! 1. Load configuration from the environment
//! 2. Initialise logging
//! 3. Build the directory and the filter-backed service
//! 4. Replay the synthetic registration load
//! 5. Probe with unregistered identifiers and report the observed FPR

pub mod config;

use std::sync::Arc;

use adaptive_bloom::{
    FilterStats, InMemoryUserDirectory, MembershipApi, MembershipService, Metrics,
    MetricsSnapshot, Resolution,
};
use anyhow::{Context, Result};
use tracing::info;

pub use config::RuntimeConfig;

/// Outcome of a demo run
#[derive(Clone, Debug)]
pub struct DemoReport {
    pub registered: usize,
    /// Checks issued for identifiers that were never registered
    pub probes: usize,
    /// Probes the filter wrongly reported as present
    pub false_positives: usize,
    pub stats: FilterStats,
    pub metrics: MetricsSnapshot,
    /// Share of all filter lookups that answered "might exist"
    pub positive_lookup_rate: f64,
}

impl DemoReport {
    pub fn observed_fpr(&self) -> f64 {
        if self.probes == 0 {
            0.0
        } else {
            self.false_positives as f64 / self.probes as f64
        }
    }
}

/// Membership node: one service over an in-memory directory
pub struct MembershipRuntime {
    config: RuntimeConfig,
    service: Arc<MembershipService<InMemoryUserDirectory>>,
    metrics: Arc<Metrics>,
}

impl MembershipRuntime {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        info!(
            expected_items = config.filter.expected_items,
            target_fpr = config.filter.target_fpr,
            growth_factor = config.filter.growth_factor,
            "Creating membership runtime"
        );

        let metrics = Arc::new(Metrics::new());
        let directory = Arc::new(InMemoryUserDirectory::new());
        let service = MembershipService::new(config.filter.clone(), directory)
            .context("invalid filter configuration")?
            .with_metrics(metrics.clone());

        Ok(Self {
            config,
            service: Arc::new(service),
            metrics,
        })
    }

    pub fn service(&self) -> &Arc<MembershipService<InMemoryUserDirectory>> {
        &self.service
    }

    /// Register `demo_items` synthetic users, then probe with as many unseen names
    pub async fn run_demo(&self) -> Result<DemoReport> {
        let total = self.config.demo_items;
        let log_every = self.config.log_every;

        for i in 0..total {
            self.service
                .register(&format!("user_{}", i))
                .await
                .with_context(|| format!("registering user_{}", i))?;

            if log_every > 0 && (i + 1) % log_every == 0 {
                info!(
                    "Items: {}, filters: {}",
                    i + 1,
                    self.service.stats().filter_count
                );
            }
        }

        let mut false_positives = 0;
        for i in 0..total {
            let outcome = self
                .service
                .check(&format!("absent_{}", i))
                .await
                .with_context(|| format!("checking absent_{}", i))?;
            if outcome.resolution == Resolution::FalsePositive {
                false_positives += 1;
            }
        }

        let report = DemoReport {
            registered: total,
            probes: total,
            false_positives,
            stats: self.service.stats(),
            metrics: self.metrics.snapshot(),
            positive_lookup_rate: self.metrics.observed_positive_rate(),
        };

        info!(
            registered = report.registered,
            filters = report.stats.filter_count,
            total_bits = report.stats.total_bits,
            current_fpr = report.stats.current_fpr,
            observed_fpr = report.observed_fpr(),
            positive_lookup_rate = report.positive_lookup_rate,
            false_positives_recovered = report.metrics.false_positives_recovered,
            "Demo load complete"
        );
        Ok(report)
    }
}
