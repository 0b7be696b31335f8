//! The auth gate: the one stateful, UI-facing controller.
//!
//! Composes the validators' caller-side (the login form), the rate limiter,
//! and the session store into login / logout / periodic re-check. The UI
//! layer reads state snapshots and receives navigation through the injected
//! [`Navigator`]; every collaborator is passed in at construction so tests
//! can substitute their own.
//!
//! State machine per session:
//! LoggedOut -> (login success) -> LoggedIn -> (logout | check fails) -> LoggedOut.
//! Until the first check completes the gate reports a loading sub-state.

use crate::config::{AuthConfig, LoginConfig};
use crate::domain::{AuthState, LoginError, MetricsPtr, NavigatorPtr, Route, StorePtr, UserProfile};
use crate::rate_limit::RateLimiter;
use crate::session::SessionStore;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ---

/// Rate-limit identifier shared by all login attempts from this client.
/// A real deployment would key by device or network origin instead.
const LOGIN_ATTEMPT_ID: &str = "login_attempts";

// ---

pub struct AuthGate {
    // ---
    sessions: SessionStore,
    limiter: RateLimiter,
    navigator: NavigatorPtr,
    metrics: MetricsPtr,
    login_cfg: LoginConfig,
    check_interval: Duration,
    state: Mutex<AuthState>,
    // Guards against a duplicate submit while the simulated latency of a
    // previous attempt is still pending.
    login_in_flight: AtomicBool,
}

impl AuthGate {
    // ---
    pub fn new(
        config: &AuthConfig,
        store: StorePtr,
        navigator: NavigatorPtr,
        metrics: MetricsPtr,
    ) -> Self {
        // ---
        Self {
            sessions: SessionStore::new(store, config.session.ttl),
            limiter: RateLimiter::new(config.login.max_attempts, config.login.window),
            navigator,
            metrics,
            login_cfg: config.login.clone(),
            check_interval: config.session.check_interval,
            state: Mutex::new(AuthState::default()),
            login_in_flight: AtomicBool::new(false),
        }
    }

    /// Current state snapshot for the UI layer.
    pub fn state(&self) -> AuthState {
        // ---
        self.state.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Attempts to log in with the given credentials.
    ///
    /// Consults the rate limiter before comparing credentials; a blocked
    /// identifier fails immediately with the remaining lockout time. Never
    /// raises: every failure mode arrives as a [`LoginError`] whose display
    /// string is the user-facing message.
    pub async fn login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        // ---
        if self.login_in_flight.swap(true, Ordering::SeqCst) {
            return Err(LoginError::AttemptInProgress);
        }

        let result = self.attempt_login(email, password).await;
        self.login_in_flight.store(false, Ordering::SeqCst);
        result
    }

    async fn attempt_login(&self, email: &str, password: &str) -> Result<(), LoginError> {
        // ---
        if !self.limiter.can_attempt(LOGIN_ATTEMPT_ID) {
            let wait = self.limiter.remaining_time(LOGIN_ATTEMPT_ID);
            self.metrics.record_rate_limited();
            tracing::warn!("Login rejected by rate limiter; {}s until reset", wait.as_secs());
            return Err(LoginError::RateLimited { wait });
        }

        // Simulated identity-provider round trip.
        tokio::time::sleep(self.login_cfg.delay).await;

        if email == self.login_cfg.email && password == self.login_cfg.password {
            let user = UserProfile::demo_teacher(email);
            self.sessions.create_session(&user).await;

            self.set_state(AuthState {
                is_authenticated: true,
                is_loading: false,
                user: Some(user),
            });

            self.metrics.record_login_success();
            Ok(())
        } else {
            self.limiter.record_attempt(LOGIN_ATTEMPT_ID);
            self.metrics.record_login_failure();
            tracing::info!("Login attempt failed credential comparison");
            // Deliberately generic: which field was wrong is not disclosed.
            Err(LoginError::InvalidCredentials)
        }
    }

    /// Clears the session and steers the UI back to the login view.
    pub async fn logout(&self) {
        // ---
        self.sessions.clear_session().await;

        self.set_state(AuthState {
            is_authenticated: false,
            is_loading: false,
            user: None,
        });

        self.navigator.replace(Route::Login);
        tracing::info!("User logged out");
    }

    /// Re-validates the session and updates state.
    ///
    /// Runs once on mount and then on every watch tick. When the session is
    /// gone and the UI sits on a protected route, navigation is forced to
    /// the login view. Failures never surface to the user.
    pub async fn check_auth(&self) {
        // ---
        let valid = self.sessions.validate_session().await;
        let user = if valid {
            self.sessions.session_user().await
        } else {
            None
        };

        let was_authenticated = {
            let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
            let previous = state.is_authenticated;
            state.is_authenticated = valid;
            state.is_loading = false;
            state.user = user;
            previous
        };

        if !valid {
            if was_authenticated {
                self.metrics.record_session_expired();
            }

            if !self.navigator.current().is_public() {
                self.navigator.replace(Route::Login);
            }
        }
    }

    /// Starts the periodic session re-check.
    ///
    /// Checks immediately, then every configured interval. The returned
    /// guard aborts the task on drop; the owning UI surface must hold it
    /// for as long as the checks should run, so teardown cannot leave an
    /// orphaned check behind.
    #[must_use = "dropping the guard cancels the session watch"]
    pub fn spawn_session_watch(self: &Arc<Self>) -> SessionWatch {
        // ---
        let gate = Arc::clone(self);
        let interval = self.check_interval;

        let handle = tokio::spawn(async move {
            loop {
                gate.check_auth().await;
                tokio::time::sleep(interval).await;
            }
        });

        SessionWatch { handle }
    }

    fn set_state(&self, next: AuthState) {
        // ---
        *self.state.lock().unwrap_or_else(|e| e.into_inner()) = next;
    }
}

// ---

/// RAII guard for the periodic session re-check task.
pub struct SessionWatch {
    // ---
    handle: tokio::task::JoinHandle<()>,
}

impl Drop for SessionWatch {
    // ---
    fn drop(&mut self) {
        // ---
        self.handle.abort();
    }
}
