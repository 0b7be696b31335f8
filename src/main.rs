use anyhow::Result;
use schoolgate::domain::{Navigator, NavigatorPtr, Route};
use schoolgate::{create_auth_gate, sanitize_input, validate_email, validate_password};
use std::env;
use std::sync::{Arc, Mutex};
use tracing::info;

/// Navigator that stands in for the UI router: it tracks the current route
/// and logs every replacing navigation.
struct LoggingNavigator {
    // ---
    current: Mutex<Route>,
}

impl LoggingNavigator {
    // ---
    fn new() -> NavigatorPtr {
        // ---
        Arc::new(Self {
            current: Mutex::new(Route::Landing),
        })
    }
}

impl Navigator for LoggingNavigator {
    // ---
    fn current(&self) -> Route {
        // ---
        *self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn replace(&self, route: Route) {
        // ---
        info!("Navigating to {}", route.as_path());
        *self.current.lock().unwrap_or_else(|e| e.into_inner()) = route;
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present, then initialize tracing to stdout
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();
    info!(
        "Starting schoolgate demo v{}...",
        env!("CARGO_PKG_VERSION")
    );

    // Fall back to a local store file when none is configured.
    if env::var("SCHOOLGATE_STORE_PATH").is_err() {
        env::set_var("SCHOOLGATE_STORE_PATH", "schoolgate-store.json");
    }

    let navigator = LoggingNavigator::new();
    let gate = create_auth_gate(navigator.clone())?;

    // Mount-time check plus periodic re-validation, held for the demo's life.
    let _watch = gate.spawn_session_watch();

    let email = env::var("SCHOOLGATE_DEMO_EMAIL").unwrap_or_else(|_| "teacher@school.edu".to_string());
    let password =
        env::var("SCHOOLGATE_DEMO_PASSWORD").unwrap_or_else(|_| "secure123".to_string());

    // What the login form does per keystroke.
    info!("Email {:?} valid: {}", email, validate_email(&email));
    let strength = validate_password(&password);
    info!(
        "Password valid: {} ({} rule failures)",
        strength.is_valid,
        strength.errors.len()
    );
    info!(
        "Sanitizer demo: {:?}",
        sanitize_input("  <b>Maths</b> javascript:period 3  ")
    );

    // A wrong password burns one rate-limit attempt.
    if let Err(err) = gate.login(&email, "wrong-password").await {
        info!("Expected failure: {}", err);
    }

    // The demo credential pair signs in and persists a session.
    match gate.login(&email, &password).await {
        Ok(()) => {
            navigator.replace(Route::Dashboard);
            let state = gate.state();
            info!(
                "Logged in as {} ({})",
                state.user.as_ref().map(|u| u.name.as_str()).unwrap_or("?"),
                email
            );
        }
        Err(err) => info!("Login failed: {}", err),
    }

    gate.check_auth().await;
    info!("Session valid: {}", gate.state().is_authenticated);

    gate.logout().await;
    info!("Session after logout: {}", gate.state().is_authenticated);

    Ok(())
}
