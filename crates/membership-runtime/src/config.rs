//! Runtime configuration loaded from environment variables

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use adaptive_bloom::AdaptiveBloomConfig;
use tracing::warn;

pub const DEFAULT_DEMO_ITEMS: usize = 15_000;
pub const DEFAULT_LOG_EVERY: usize = 1_000;

/// Settings for one runtime instance
#[derive(Clone, Debug, PartialEq)]
pub struct RuntimeConfig {
    /// Filter sizing and growth policy
    pub filter: AdaptiveBloomConfig,
    /// Synthetic registrations to replay
    pub demo_items: usize,
    /// Emit a progress line every this many registrations (0 disables)
    pub log_every: usize,
    /// `EnvFilter` directive
    pub log_level: String,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            filter: AdaptiveBloomConfig::default(),
            demo_items: DEFAULT_DEMO_ITEMS,
            log_every: DEFAULT_LOG_EVERY,
            log_level: "info".to_string(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from the process environment
    ///
    /// Unset variables take their defaults. Unparseable values also take
    /// their defaults, with a warning.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            filter: AdaptiveBloomConfig {
                expected_items: parse_or(
                    &lookup,
                    "ABF_EXPECTED_ITEMS",
                    defaults.filter.expected_items,
                ),
                target_fpr: parse_or(&lookup, "ABF_TARGET_FPR", defaults.filter.target_fpr),
                growth_factor: parse_or(
                    &lookup,
                    "ABF_GROWTH_FACTOR",
                    defaults.filter.growth_factor,
                ),
            },
            demo_items: parse_or(&lookup, "ABF_DEMO_ITEMS", defaults.demo_items),
            log_every: parse_or(&lookup, "ABF_LOG_EVERY", defaults.log_every),
            log_level: log_level(&lookup).unwrap_or(defaults.log_level),
        }
    }

    /// Log filter directive alone, for installing the subscriber before
    /// the rest of the configuration is parsed
    pub fn log_level_from_env() -> String {
        log_level(&|key: &str| env::var(key).ok()).unwrap_or_else(|| "info".to_string())
    }
}

fn log_level<F>(lookup: &F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup("ABF_LOG_LEVEL").or_else(|| lookup("RUST_LOG"))
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(e) => {
                warn!(
                    variable = key,
                    value = %raw,
                    error = %e,
                    default = %default,
                    "Unparseable setting, using default"
                );
                default
            }
        },
    }
}
