mod metrics;
mod models;
mod navigator;
mod store;

// Publicly expose the Metrics abstraction
pub use metrics::{Metrics, MetricsPtr};

// Publicly expose the auth models and collaborator seams
pub use models::{AuthState, LoginError, Route, SessionRecord, UserProfile};
pub use navigator::{Navigator, NavigatorPtr};
pub use store::{KeyValueStore, StorePtr};
