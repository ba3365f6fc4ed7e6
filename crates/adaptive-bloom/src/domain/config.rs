//! Adaptive filter configuration and validation
//!
//! # Example
//!
//! ```
//! use adaptive_bloom::domain::AdaptiveBloomConfigBuilder;
//!
//! let config = AdaptiveBloomConfigBuilder::new()
//!     .expected_items(50_000)
//!     .target_fpr(0.01)
//!     .growth_factor(2.0)
//!     .build()
//!     .expect("valid config");
//! assert_eq!(config.expected_items, 50_000);
//! ```

use super::parameters::{initial_parameters, MAX_FILTER_BITS};
use crate::error::FilterError;
use serde::{Deserialize, Serialize};

/// Largest accepted growth multiplier
pub const MAX_GROWTH_FACTOR: f64 = 16.0;

/// Configuration for an [`AdaptiveBloomFilter`](super::AdaptiveBloomFilter)
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveBloomConfig {
    /// Initial capacity planning estimate
    pub expected_items: usize,
    /// False positive rate ceiling that triggers growth, in (0, 1)
    pub target_fpr: f64,
    /// Multiplier applied to size and expected items on growth, in (1, 16]
    pub growth_factor: f64,
}

impl Default for AdaptiveBloomConfig {
    fn default() -> Self {
        Self {
            expected_items: 10_000,
            target_fpr: 0.01,
            growth_factor: 2.0,
        }
    }
}

impl AdaptiveBloomConfig {
    /// Create a new configuration with validation
    pub fn new(
        expected_items: usize,
        target_fpr: f64,
        growth_factor: f64,
    ) -> Result<Self, FilterError> {
        let config = Self {
            expected_items,
            target_fpr,
            growth_factor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters that would produce a degenerate filter
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.expected_items == 0 {
            return Err(FilterError::ZeroExpectedItems);
        }

        if self.target_fpr.is_nan() || self.target_fpr <= 0.0 || self.target_fpr >= 1.0 {
            return Err(FilterError::InvalidFpr {
                fpr: self.target_fpr,
            });
        }

        if self.growth_factor.is_nan()
            || self.growth_factor <= 1.0
            || self.growth_factor > MAX_GROWTH_FACTOR
        {
            return Err(FilterError::InvalidGrowthFactor {
                factor: self.growth_factor,
                max: MAX_GROWTH_FACTOR,
            });
        }

        let bits = initial_parameters(self).size_bits;
        if bits > MAX_FILTER_BITS {
            return Err(FilterError::FilterTooLarge {
                bits,
                max: MAX_FILTER_BITS,
            });
        }

        Ok(())
    }
}

/// Fluent builder for [`AdaptiveBloomConfig`]
///
/// Unset fields fall back to [`AdaptiveBloomConfig::default`].
#[derive(Default)]
pub struct AdaptiveBloomConfigBuilder {
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
    growth_factor: Option<f64>,
}

impl AdaptiveBloomConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial capacity estimate
    pub fn expected_items(mut self, items: usize) -> Self {
        self.expected_items = Some(items);
        self
    }

    /// Set the growth-triggering false positive rate
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Set the growth multiplier
    pub fn growth_factor(mut self, factor: f64) -> Self {
        self.growth_factor = Some(factor);
        self
    }

    /// Build the configuration, validating all parameters
    pub fn build(self) -> Result<AdaptiveBloomConfig, FilterError> {
        let defaults = AdaptiveBloomConfig::default();

        let config = AdaptiveBloomConfig {
            expected_items: self.expected_items.unwrap_or(defaults.expected_items),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
            growth_factor: self.growth_factor.unwrap_or(defaults.growth_factor),
        };

        config.validate()?;
        Ok(config)
    }
}
