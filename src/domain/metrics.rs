use std::sync::Arc;

/// Abstraction for authentication event counters.
pub trait Metrics: Send + Sync + 'static {
    // ---
    /// Record a successful login.
    fn record_login_success(&self);

    /// Record a rejected credential comparison.
    fn record_login_failure(&self);

    /// Record a login refused by the rate limiter before comparison.
    fn record_rate_limited(&self);

    /// Record a session invalidated by expiry or decode failure.
    fn record_session_expired(&self);
}

/// Type alias for any backend that implements Metrics.
pub type MetricsPtr = Arc<dyn Metrics>;
