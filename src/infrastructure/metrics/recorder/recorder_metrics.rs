//! Metrics implementation over the global `metrics` registry.
//!
//! This struct is intentionally empty: all counters are registered globally
//! via the `counter!()` macro in the sibling `counters` module, and whatever
//! recorder the embedding application installs collects them. No exporter is
//! bundled here; the gate has no HTTP surface to scrape.

use crate::domain::Metrics;

pub struct RecorderMetrics {
    // Empty - uses global metrics registry pattern
}

impl RecorderMetrics {
    pub fn new() -> Self {
        tracing::info!("Creating recorder metrics");
        RecorderMetrics {}
    }
}

impl Metrics for RecorderMetrics {
    // ---
    fn record_login_success(&self) {
        tracing::debug!("Recording login success");
        super::increment_login_success();
    }

    fn record_login_failure(&self) {
        tracing::debug!("Recording login failure");
        super::increment_login_failure();
    }

    fn record_rate_limited(&self) {
        tracing::debug!("Recording rate-limited login rejection");
        super::increment_rate_limited();
    }

    fn record_session_expired(&self) {
        tracing::debug!("Recording session expiry");
        super::increment_session_expired();
    }
}
