// src/config.rs

//! Application configuration loaded from environment variables.
//!
//! This module defines all startup-time configuration for the auth gate.
//! Configuration is validated eagerly and failures are treated as
//! deployment errors rather than recoverable runtime conditions.

use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

// ============================================================
// Local macros (config-only, intentionally explicit)
// ============================================================

/// Reads a required environment variable.
///
/// # Behavior
/// - Fails fast if the variable is missing
/// - Produces a clear, human-readable error message
/// - Intended for startup-time configuration validation
///
/// Missing configuration is treated as a deployment error,
/// not a recoverable runtime condition.
macro_rules! required_env {
    // ---
    ($key:literal) => {
        std::env::var($key)
            .map_err(|_| anyhow::anyhow!(concat!("Missing required configuration: ", $key)))?
    };
}

/// Reads an optional environment variable and attempts to parse it.
///
/// If the variable is missing or cannot be parsed, the provided
/// default value is used. This macro is appropriate for non-critical
/// tuning parameters where fallback behavior is acceptable.
macro_rules! optional_env_parse {
    // ---
    ($key:literal, $ty:ty, $default:expr) => {
        std::env::var($key)
            .ok()
            .and_then(|v| v.parse::<$ty>().ok())
            .unwrap_or($default)
    };
}

#[cfg(test)]
/// Asserts that a configuration constructor fails due to a missing
/// required environment variable.
///
/// This macro is intended for config unit tests only and enforces
/// consistent error messages across failure cases.
macro_rules! assert_missing_config {
    // ---
    ($expr:expr, $key:literal) => {{
        let err = $expr.expect_err("expected configuration error");
        assert!(
            err.to_string()
                .contains(concat!("Missing required configuration: ", $key)),
            "unexpected error: {err}"
        );
    }};
}

// ============================================================
// Public configuration facade
// ============================================================

/// Aggregated application configuration.
///
/// This is the single source of truth for startup configuration.
/// All required configuration is validated eagerly during initialization.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub storage: storage::StorageConfig,
    pub session: session::SessionConfig,
    pub login: login::LoginConfig,
}

impl AuthConfig {
    /// Loads and validates all application configuration from the environment.
    ///
    /// # Errors
    /// Returns an error if any required configuration is missing or invalid.
    /// This function is intended to be called exactly once at startup.
    pub fn from_env() -> Result<Self> {
        // ---
        Ok(Self {
            storage: storage::StorageConfig::from_env()?,
            session: session::SessionConfig::from_env()?,
            login: login::LoginConfig::from_env()?,
        })
    }
}

// ============================================================
// Storage configuration
// ============================================================

mod storage {
    // ---
    use super::*;

    /// Where the file-backed key-value store keeps its JSON document.
    ///
    /// This configuration is required for the composition root and is
    /// validated eagerly during startup.
    #[derive(Debug, Clone)]
    pub struct StorageConfig {
        /// Path of the persisted key-value document.
        pub path: PathBuf,
    }

    impl StorageConfig {
        /// Builds a [`StorageConfig`] from environment variables.
        ///
        /// # Errors
        /// Returns an error if required configuration is missing.
        /// Startup will fail fast rather than continuing with incomplete
        /// or invalid configuration.
        pub fn from_env() -> Result<Self> {
            // ---
            let path = required_env!("SCHOOLGATE_STORE_PATH");

            Ok(Self {
                path: PathBuf::from(path),
            })
        }
    }
}
pub use storage::StorageConfig;

// ============================================================
// Session configuration
// ============================================================

mod session {
    // ---
    use super::*;

    /// Session lifetime and re-validation cadence.
    #[derive(Debug, Clone)]
    pub struct SessionConfig {
        /// How long a created session stays valid. Defaults to 24 hours.
        pub ttl: Duration,

        /// How often the background watch re-validates the session.
        /// Defaults to 5 minutes.
        pub check_interval: Duration,
    }

    impl SessionConfig {
        /// Builds a [`SessionConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let ttl_hours = optional_env_parse!("SCHOOLGATE_SESSION_TTL_HOURS", u64, 24);
            let check_secs = optional_env_parse!("SCHOOLGATE_CHECK_INTERVAL_SEC", u64, 300);

            Ok(Self {
                ttl: Duration::from_secs(ttl_hours * 3600),
                check_interval: Duration::from_secs(check_secs),
            })
        }
    }
}
pub use session::SessionConfig;

// ============================================================
// Login configuration
// ============================================================

mod login {
    // ---
    use super::*;

    /// Login throttling and the demo credential pair.
    ///
    /// The credential pair stands in for a real identity provider; there is
    /// no server authority behind it. Defaults match the demo deployment.
    #[derive(Debug, Clone)]
    pub struct LoginConfig {
        /// Failed attempts allowed per rate-limit window. Defaults to 5.
        pub max_attempts: u32,

        /// Fixed rate-limit window. Defaults to 15 minutes.
        pub window: Duration,

        /// Artificial latency simulating an identity-provider round trip.
        /// Defaults to 1 second; tests set it to 0.
        pub delay: Duration,

        /// Accepted demo email.
        pub email: String,

        /// Accepted demo password.
        pub password: String,
    }

    impl LoginConfig {
        /// Builds a [`LoginConfig`] from environment variables.
        pub fn from_env() -> Result<Self> {
            // ---
            let max_attempts = optional_env_parse!("SCHOOLGATE_MAX_LOGIN_ATTEMPTS", u32, 5);
            let window_secs = optional_env_parse!("SCHOOLGATE_LOGIN_WINDOW_SEC", u64, 900);
            let delay_ms = optional_env_parse!("SCHOOLGATE_LOGIN_DELAY_MS", u64, 1000);

            let email = std::env::var("SCHOOLGATE_DEMO_EMAIL")
                .unwrap_or_else(|_| "teacher@school.edu".to_string());
            let password = std::env::var("SCHOOLGATE_DEMO_PASSWORD")
                .unwrap_or_else(|_| "secure123".to_string());

            Ok(Self {
                max_attempts,
                window: Duration::from_secs(window_secs),
                delay: Duration::from_millis(delay_ms),
                email,
                password,
            })
        }
    }
}
pub use login::LoginConfig;

// ============================================================
// Tests
// ============================================================
