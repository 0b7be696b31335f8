use super::models::Route;
use std::sync::Arc;

/// Abstraction over the UI router that consumes the auth gate.
///
/// The gate only ever inspects the current route and issues replacing
/// navigations (no history entry), matching how a protected shell redirects
/// an expired session to the login view.
pub trait Navigator: Send + Sync + 'static {
    // ---
    /// The route currently displayed.
    fn current(&self) -> Route;

    /// Replace the current route.
    fn replace(&self, route: Route);
}

/// Type alias for any backend that implements Navigator.
pub type NavigatorPtr = Arc<dyn Navigator>;
