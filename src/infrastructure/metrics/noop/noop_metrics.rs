use crate::domain::Metrics;

/// No-op metrics implementation for testing.
pub struct NoopMetrics;

impl NoopMetrics {
    pub fn new() -> Self {
        NoopMetrics
    }
}

impl Metrics for NoopMetrics {
    // ---
    fn record_login_success(&self) {}
    fn record_login_failure(&self) {}
    fn record_rate_limited(&self) {}
    fn record_session_expired(&self) {}
}
