use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Represents the signed-in user as reported by the identity check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    // ---
    pub email: String,
    pub name: String,
    pub id: String,
    pub role: String,
}

impl UserProfile {
    // ---
    /// The constant demo teacher profile assigned on successful login.
    pub fn demo_teacher(email: &str) -> Self {
        // ---
        Self {
            email: email.to_string(),
            name: "John Smith".to_string(),
            id: "teacher_001".to_string(),
            role: "teacher".to_string(),
        }
    }
}

/// The session record persisted (encoded) under the session token key.
///
/// The encoding is reversible, not authenticated: decoding only detects
/// self-reported expiry and malformed data, never tampering.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionRecord {
    // ---
    /// Who is logged in.
    pub user: UserProfile,

    /// When the session was created.
    pub timestamp: DateTime<Utc>,

    /// When the session stops being valid.
    pub expires_at: DateTime<Utc>,
}

/// Snapshot of the auth gate's state, consumed by the UI layer.
///
/// `is_loading` covers the gap between mount and the first session check:
/// the gate reports unauthenticated-but-loading until that check completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthState {
    // ---
    pub is_authenticated: bool,
    pub is_loading: bool,
    pub user: Option<UserProfile>,
}

impl Default for AuthState {
    // ---
    fn default() -> Self {
        // ---
        Self {
            is_authenticated: false,
            is_loading: true,
            user: None,
        }
    }
}

/// The views the auth gate can steer the UI router toward.
///
/// `Landing` and `Login` are public; everything else sits behind the gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Landing,
    Login,
    Dashboard,
}

impl Route {
    // ---
    /// Path rendered by the UI router for this route.
    pub fn as_path(&self) -> &'static str {
        // ---
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Dashboard => "/dashboard",
        }
    }

    /// Whether unauthenticated visitors may stay on this route.
    pub fn is_public(&self) -> bool {
        // ---
        matches!(self, Route::Landing | Route::Login)
    }
}

/// Structured login failure returned to the UI layer.
///
/// Login never raises: the caller always receives either success or one of
/// these variants, with a user-facing message as the display string. The
/// invalid-credentials message deliberately does not disclose which field
/// was wrong.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    // ---
    #[error(
        "Too many login attempts. Please try again in {} minutes.",
        .wait.as_secs().div_ceil(60).max(1)
    )]
    RateLimited { wait: Duration },

    #[error("Invalid email or password. Please check your credentials and try again.")]
    InvalidCredentials,

    #[error("Login failed due to a network error. Please try again.")]
    Transient,

    #[error("A login attempt is already in progress.")]
    AttemptInProgress,
}

#[cfg(test)]
mod tests {
    // ---
    use super::*;

    #[test]
    fn rate_limited_message_rounds_minutes_up() {
        // ---
        let err = LoginError::RateLimited {
            wait: Duration::from_secs(61),
        };
        assert!(err.to_string().contains("2 minutes"));

        let err = LoginError::RateLimited {
            wait: Duration::from_secs(1),
        };
        assert!(err.to_string().contains("1 minutes"));
    }

    #[test]
    fn public_routes() {
        // ---
        assert!(Route::Landing.is_public());
        assert!(Route::Login.is_public());
        assert!(!Route::Dashboard.is_public());
    }
}
