// Test helpers are intentionally partially used
#![allow(dead_code)]

use schoolgate::domain::{Navigator, Route, StorePtr};
use schoolgate::{
    create_memory_store, create_noop_metrics, AuthConfig, AuthGate, LoginConfig, SessionConfig,
    StorageConfig,
};
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub const DEMO_EMAIL: &str = "teacher@school.edu";
pub const DEMO_PASSWORD: &str = "secure123";

// ============================================================================
// Test Setup
// ============================================================================

/// Navigator double: tracks the current route and records every replacement.
pub struct TestNavigator {
    // ---
    current: Mutex<Route>,
    replaced: Mutex<Vec<Route>>,
}

impl TestNavigator {
    // ---
    pub fn at(route: Route) -> Arc<Self> {
        // ---
        Arc::new(Self {
            current: Mutex::new(route),
            replaced: Mutex::new(Vec::new()),
        })
    }

    /// Move the "UI" to a route without recording a gate navigation.
    pub fn visit(&self, route: Route) {
        // ---
        *self.current.lock().unwrap() = route;
    }

    pub fn replacements(&self) -> Vec<Route> {
        // ---
        self.replaced.lock().unwrap().clone()
    }
}

impl Navigator for TestNavigator {
    // ---
    fn current(&self) -> Route {
        *self.current.lock().unwrap()
    }

    fn replace(&self, route: Route) {
        *self.current.lock().unwrap() = route;
        self.replaced.lock().unwrap().push(route);
    }
}

/// Config with demo credentials, no simulated latency, and tight timings
/// suitable for tests. Callers adjust fields as needed.
pub fn test_config() -> AuthConfig {
    // ---
    AuthConfig {
        storage: StorageConfig {
            path: "unused.json".into(),
        },
        session: SessionConfig {
            ttl: Duration::from_secs(3600),
            check_interval: Duration::from_millis(10),
        },
        login: LoginConfig {
            max_attempts: 5,
            window: Duration::from_secs(900),
            delay: Duration::ZERO,
            email: DEMO_EMAIL.to_string(),
            password: DEMO_PASSWORD.to_string(),
        },
    }
}

pub fn build_gate(
    config: &AuthConfig,
    store: StorePtr,
    navigator: Arc<TestNavigator>,
) -> Arc<AuthGate> {
    // ---
    Arc::new(AuthGate::new(
        config,
        store,
        navigator,
        create_noop_metrics().expect("noop metrics"),
    ))
}

/// Gate over a fresh in-memory store, parked on the login view.
pub fn gate_with_memory_store() -> (Arc<AuthGate>, Arc<TestNavigator>, StorePtr) {
    // ---
    let store = create_memory_store();
    let navigator = TestNavigator::at(Route::Login);
    let gate = build_gate(&test_config(), store.clone(), navigator.clone());
    (gate, navigator, store)
}
