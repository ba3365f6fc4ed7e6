//! # Membership Runtime
//!
//! Replays a synthetic registration load against the filter-backed
//! membership service and logs how the filter grows.

use anyhow::Result;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

use membership_runtime::{MembershipRuntime, RuntimeConfig};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging before the rest of the configuration is parsed
    let filter = EnvFilter::try_new(RuntimeConfig::log_level_from_env())
        .unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = RuntimeConfig::from_env();
    let runtime = MembershipRuntime::new(config)?;
    let report = runtime.run_demo().await?;

    info!(
        "Filters: {}, items: {}, observed FPR: {:.4}",
        report.stats.filter_count,
        report.stats.total_items,
        report.observed_fpr()
    );

    Ok(())
}
