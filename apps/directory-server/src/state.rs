//! Application state.

use std::sync::Arc;

use user_store::UserStore;

use crate::config::Config;
use crate::services::runtime::HealthReporter;

/// Shared application state.
pub struct AppState<S: UserStore> {
    /// Server configuration.
    pub config: Config,
    /// User store.
    pub store: S,
    /// Health reporter.
    pub health: HealthReporter,
}

impl<S: UserStore> AppState<S> {
    /// Creates new application state.
    pub fn new(config: Config, store: S) -> Self {
        let health = HealthReporter::new(config.environment.clone());
        Self {
            config,
            store,
            health,
        }
    }
}

/// Type alias for shared state.
pub type SharedState<S> = Arc<AppState<S>>;

/// Creates shared state from config and store.
pub fn create_shared_state<S: UserStore>(config: Config, store: S) -> SharedState<S> {
    Arc::new(AppState::new(config, store))
}
