use metrics::counter;

/// Increment the successful-login counter.
pub fn increment_login_success() {
    counter!("auth_login_success_total").increment(1);
}

/// Increment the failed-login counter.
pub fn increment_login_failure() {
    counter!("auth_login_failure_total").increment(1);
}

/// Increment the rate-limited-rejection counter.
pub fn increment_rate_limited() {
    counter!("auth_rate_limited_total").increment(1);
}

/// Increment the expired-or-invalid-session counter.
pub fn increment_session_expired() {
    counter!("auth_session_expired_total").increment(1);
}
