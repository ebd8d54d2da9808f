//! User Directory Server
//!
//! Serves an in-memory user directory over a small REST API, together with a
//! health report and a dashboard page that polls the API.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod services;
pub mod state;

use std::sync::Arc;

use axum::Router;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use user_store::{MemoryUserStore, UserStore};

use crate::config::Config;
use crate::middleware::{cors_layer, panic_response};
use crate::state::{AppState, create_shared_state};

/// Creates the application router with all routes configured.
pub fn create_app<S: UserStore + 'static>(state: Arc<AppState<S>>) -> Router {
    let router = api::create_router(&state.config.static_dir).with_state(state);
    apply_layers(router)
}

/// Wraps a router with panic recovery, request tracing and CORS.
pub fn apply_layers(router: Router) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
}

/// Creates the application state with the given configuration and store.
pub fn create_state<S: UserStore>(config: Config, store: S) -> Arc<AppState<S>> {
    create_shared_state(config, store)
}

/// Creates the in-memory store, seeded with demo users if configured.
pub fn create_store(config: &Config) -> MemoryUserStore {
    if config.seed_demo_data {
        MemoryUserStore::seeded()
    } else {
        MemoryUserStore::new()
    }
}

/// Initializes tracing with the given log level.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();
}
