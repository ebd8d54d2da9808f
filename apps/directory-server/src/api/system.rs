//! Dashboard, health and API index endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{OriginalUri, State},
    response::Html,
};
use user_store::UserStore;

use crate::error::{ServerError, ServerResult};
use crate::protocol::{ApiIndexResponse, HealthResponse};
use crate::state::AppState;

/// Self-contained dashboard page. It polls `/health` and `/api/users`.
const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// Serves the dashboard.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Health check endpoint.
pub async fn health_check<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ServerResult<Json<HealthResponse>> {
    let reporter = state.health.clone();
    let report = tokio::task::spawn_blocking(move || reporter.report())
        .await
        .map_err(|e| ServerError::Internal(format!("health report task failed: {e}")))?;

    Ok(Json(report))
}

/// Describes the available API endpoints.
pub async fn api_index() -> Json<ApiIndexResponse> {
    Json(ApiIndexResponse::new())
}

/// Fallback for unmatched paths and methods.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> ServerError {
    tracing::debug!(path = %uri, "Route not found");
    ServerError::RouteNotFound {
        path: uri.to_string(),
    }
}
