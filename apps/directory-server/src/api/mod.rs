//! API endpoints.

pub mod extract;
pub mod system;
pub mod users;

use std::path::Path;
use std::sync::Arc;

use axum::{Router, handler::HandlerWithoutStateExt, routing::get};
use tower_http::services::ServeDir;
use user_store::UserStore;

use crate::state::AppState;

/// Creates the API router with all endpoints.
///
/// Files under `static_dir` are served at `/static`; missing files fall
/// through to the route-not-found envelope.
pub fn create_router<S: UserStore + 'static>(static_dir: &Path) -> Router<Arc<AppState<S>>> {
    let static_files =
        ServeDir::new(static_dir).not_found_service(system::route_not_found.into_service());

    Router::new()
        // Dashboard
        .route("/", get(system::dashboard))
        // Health check
        .route("/health", get(system::health_check))
        // API index
        .route("/api", get(system::api_index))
        // User endpoints
        .route(
            "/api/users",
            get(users::list_users).post(users::create_user),
        )
        .route("/api/users/{id}", get(users::get_user))
        // Static assets
        .nest_service("/static", static_files)
        .fallback(system::route_not_found)
        .method_not_allowed_fallback(system::route_not_found)
}
