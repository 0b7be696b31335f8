// src/lib.rs
use anyhow::Result;
use domain::NavigatorPtr;
use std::env;
use std::sync::Arc;

// Public exports (visible outside this module)
pub mod domain;

// Internal-only exports (sibling access within this module)
mod auth;
mod config;
mod infrastructure;
mod rate_limit;
mod sanitize;
mod session;
mod validation;

// Hoist up only the public symbol(s)
pub use auth::{AuthGate, SessionWatch};
pub use rate_limit::RateLimiter;
pub use sanitize::sanitize_input;
pub use session::{SessionStore, AUTH_FLAG_KEY, SESSION_TOKEN_KEY};
pub use validation::{validate_email, validate_password, ValidationResult};

pub use config::*;

// Publicly expose the infrastructure creation functions
pub use infrastructure::{
    create_file_store, // ---
    create_memory_store,
    create_noop_metrics,
    create_recorder_metrics,
};

/// Build the auth gate with metrics implementation determined by environment variables.
///
/// This is the composition root: configuration is loaded from the
/// environment, the file-backed store is opened at the configured path, and
/// the caller supplies only the UI-routing collaborator.
pub fn create_auth_gate(navigator: NavigatorPtr) -> Result<Arc<AuthGate>> {
    // ---
    // Load all configuration from environment
    let config = AuthConfig::from_env()?;

    // Determine metrics implementation from environment
    let metrics_type = env::var("SCHOOLGATE_METRICS_TYPE").unwrap_or_else(|_| "noop".to_string());
    let metrics = if metrics_type == "recorder" {
        create_recorder_metrics()?
    } else {
        create_noop_metrics()?
    };

    tracing_subscriber::fmt::try_init().ok(); // Ignores if already initialized

    // Create infrastructure dependencies
    let store = create_file_store(&config.storage.path);

    Ok(Arc::new(AuthGate::new(&config, store, navigator, metrics)))
}
