//! Fixed-window login attempt limiter.
//!
//! Counts failed attempts per identifier and refuses further attempts once
//! the window's budget is spent. The whole counter resets when the window
//! elapses (fixed window, not sliding). State is in-memory only and is lost
//! on restart, which is intended.

use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, Instant};

/// One identifier's attempt budget within the current window.
#[derive(Debug, Clone, Copy)]
struct AttemptRecord {
    // ---
    count: u32,
    reset_at: Instant,
}

/// Fixed-window attempt counter keyed by an identifier string.
///
/// The map sits behind a `Mutex` so one shared instance can serve the login
/// flow and the background session check without reordering: a recorded
/// attempt is visible to the very next `can_attempt` for the same id.
#[derive(Debug)]
pub struct RateLimiter {
    // ---
    attempts: Mutex<HashMap<String, AttemptRecord>>,
    max_attempts: u32,
    window: Duration,
}

impl RateLimiter {
    // ---
    pub fn new(max_attempts: u32, window: Duration) -> Self {
        // ---
        Self {
            attempts: Mutex::new(HashMap::new()),
            max_attempts,
            window,
        }
    }

    /// Whether `identifier` may attempt right now.
    ///
    /// A stale record (window elapsed) is discarded here rather than by a
    /// sweeper; the map only ever holds identifiers seen within one window.
    pub fn can_attempt(&self, identifier: &str) -> bool {
        // ---
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());

        let Some(record) = attempts.get(identifier) else {
            return true;
        };

        if Instant::now() > record.reset_at {
            attempts.remove(identifier);
            return true;
        }

        record.count < self.max_attempts
    }

    /// Record one failed attempt for `identifier`.
    ///
    /// Never blocks by itself: callers must consult `can_attempt` first.
    /// Starts a fresh window when none is active, otherwise increments the
    /// current window's count.
    pub fn record_attempt(&self, identifier: &str) {
        // ---
        let now = Instant::now();
        let mut attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());

        match attempts.get_mut(identifier) {
            Some(record) if now <= record.reset_at => {
                record.count += 1;
            }
            _ => {
                attempts.insert(
                    identifier.to_string(),
                    AttemptRecord {
                        count: 1,
                        reset_at: now + self.window,
                    },
                );
            }
        }
    }

    /// Time until `identifier`'s window resets, zero when no window is active.
    pub fn remaining_time(&self, identifier: &str) -> Duration {
        // ---
        let attempts = self.attempts.lock().unwrap_or_else(|e| e.into_inner());

        attempts
            .get(identifier)
            .map(|record| record.reset_at.saturating_duration_since(Instant::now()))
            .unwrap_or(Duration::ZERO)
    }
}
