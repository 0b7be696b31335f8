//! Session management for the signed-in teacher.
//!
//! Persists a base64(JSON) session record in the key-value store with a
//! configurable TTL. The encoding is reversible and carries no signature:
//! validation detects expiry and corruption, not tampering. Any ambiguity
//! resolves to "not authenticated" (fail-closed).

use crate::domain::{SessionRecord, StorePtr, UserProfile};
use base64::Engine;
use chrono::Utc;
use std::time::Duration;

// ---

/// Storage key holding the encoded session record.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Storage key holding the literal `"true"` while a session is live.
///
/// Advisory flag for the UI layer; validation decides from the token alone.
pub const AUTH_FLAG_KEY: &str = "user_authenticated";

// ---

/// Owns the two persisted session keys. No other component touches them.
#[derive(Clone)]
pub struct SessionStore {
    // ---
    store: StorePtr,
    ttl: Duration,
}

impl SessionStore {
    // ---
    pub fn new(store: StorePtr, ttl: Duration) -> Self {
        // ---
        Self { store, ttl }
    }

    /// Creates a session for `user` expiring after the configured TTL and
    /// persists it. Returns the encoded token.
    ///
    /// Storage failures are logged by the store and leave the caller with a
    /// token that will simply fail the next validation.
    pub async fn create_session(&self, user: &UserProfile) -> String {
        // ---
        let now = Utc::now();
        let record = SessionRecord {
            user: user.clone(),
            timestamp: now,
            expires_at: now
                + chrono::Duration::from_std(self.ttl).unwrap_or(chrono::Duration::hours(24)),
        };

        let token = encode_record(&record);

        if !self.store.set(SESSION_TOKEN_KEY, &token).await {
            tracing::warn!("Failed to persist session token");
        }
        if !self.store.set(AUTH_FLAG_KEY, "true").await {
            tracing::warn!("Failed to persist authentication flag");
        }

        tracing::info!("Created session for user: {}", user.email);

        token
    }

    /// Whether a live session exists.
    ///
    /// Absent token: false. Undecodable or expired token: clears both keys
    /// and returns false. Only a well-formed, unexpired record passes.
    pub async fn validate_session(&self) -> bool {
        // ---
        let Some(token) = self.store.get(SESSION_TOKEN_KEY).await else {
            return false;
        };

        let Some(record) = decode_record(&token) else {
            tracing::warn!("Session token failed to decode; clearing session");
            self.clear_session().await;
            return false;
        };

        if Utc::now() > record.expires_at {
            tracing::info!("Session expired for user: {}", record.user.email);
            self.clear_session().await;
            return false;
        }

        true
    }

    /// The profile carried by the current live session, if any.
    ///
    /// Lets the gate restore the signed-in user after a process restart
    /// without re-running login. Same fail-closed rules as validation.
    pub async fn session_user(&self) -> Option<UserProfile> {
        // ---
        let token = self.store.get(SESSION_TOKEN_KEY).await?;
        let record = decode_record(&token)?;

        if Utc::now() > record.expires_at {
            return None;
        }

        Some(record.user)
    }

    /// Removes both persisted keys. Safe to call when no session exists.
    pub async fn clear_session(&self) {
        // ---
        self.store.remove(SESSION_TOKEN_KEY).await;
        self.store.remove(AUTH_FLAG_KEY).await;
    }
}

// ---

fn encode_record(record: &SessionRecord) -> String {
    // ---
    // SessionRecord serialization cannot fail: all fields are plain data.
    let json = serde_json::to_string(record).unwrap_or_default();
    base64::engine::general_purpose::STANDARD.encode(json)
}

fn decode_record(token: &str) -> Option<SessionRecord> {
    // ---
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(token)
        .ok()?;
    serde_json::from_slice(&bytes).ok()
}
