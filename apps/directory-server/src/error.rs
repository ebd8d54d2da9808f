//! Server error types.

use axum::{
    Json,
    extract::rejection::{FormRejection, JsonRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use user_store::UserStoreError;

use crate::protocol::ErrorEnvelope;

/// Message sent to clients for any unexpected failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Something went wrong!";

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Invalid request parameters.
    #[error("{0}")]
    InvalidRequest(String),

    /// No route matches the request.
    #[error("Route not found")]
    RouteNotFound { path: String },

    /// User store error.
    #[error(transparent)]
    Store(#[from] UserStoreError),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ServerError {
    /// Returns the HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::RouteNotFound { .. } => StatusCode::NOT_FOUND,
            ServerError::Store(e) => match e {
                UserStoreError::Invalid(_) => StatusCode::BAD_REQUEST,
                UserStoreError::NotFound { .. } => StatusCode::NOT_FOUND,
                UserStoreError::AlreadyExists { .. } => StatusCode::CONFLICT,
            },
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Internal details stay in the logs.
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "Unhandled error");
            INTERNAL_ERROR_MESSAGE.to_string()
        } else {
            self.to_string()
        };

        let path = match self {
            ServerError::RouteNotFound { path } => Some(path),
            _ => None,
        };

        (status, Json(ErrorEnvelope::new(message, path))).into_response()
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<FormRejection> for ServerError {
    fn from(rejection: FormRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

/// Result type alias for server operations.
pub type ServerResult<T> = Result<T, ServerError>;
