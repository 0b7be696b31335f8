mod counters;
mod recorder_metrics;

pub use recorder_metrics::RecorderMetrics;
use std::sync::Arc;

// Re-export utilities for internal use within this module
pub(crate) use counters::{
    increment_login_failure, increment_login_success, increment_rate_limited,
    increment_session_expired,
};

/// Creates a metrics implementation backed by the global `metrics` registry.
///
/// Counters are registered lazily on first use; whatever recorder the host
/// application installs (if any) receives the events.
pub fn create() -> anyhow::Result<crate::domain::MetricsPtr> {
    tracing::info!("Initializing recorder metrics");

    Ok(Arc::new(RecorderMetrics::new()))
}
