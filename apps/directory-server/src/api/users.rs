//! User directory API endpoints.

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use user_store::{UserStore, UserStoreError};

use crate::api::extract::{ApiPayload, ApiQuery};
use crate::error::ServerResult;
use crate::protocol::{
    CreateUserRequest, ListUsersQuery, ListUsersResponse, UserResponse, parse_int_prefix,
};
use crate::state::AppState;

/// Lists users, optionally filtered by role and limited in count.
pub async fn list_users<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiQuery(pairs): ApiQuery<Vec<(String, String)>>,
) -> ServerResult<Json<ListUsersResponse>> {
    let filter = ListUsersQuery::from_pairs(pairs).into_filter();
    let users = state.store.list_users(filter).await?;

    Ok(Json(ListUsersResponse::new(users)))
}

/// Gets a user by ID.
pub async fn get_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(raw_id): Path<String>,
) -> ServerResult<Json<UserResponse>> {
    let user_id = parse_int_prefix(&raw_id).and_then(|id| u64::try_from(id).ok());

    let user = match user_id {
        Some(id) => state.store.get_user(id).await?,
        None => None,
    }
    .ok_or_else(|| UserStoreError::not_found("User", raw_id))?;

    Ok(Json(UserResponse::new(user)))
}

/// Creates a user from a JSON or urlencoded form body.
pub async fn create_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    ApiPayload(request): ApiPayload<CreateUserRequest>,
) -> ServerResult<(StatusCode, Json<UserResponse>)> {
    let user = state.store.create_user(request.into_draft()).await?;

    tracing::info!(user_id = user.id, role = %user.role, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse::new(user).with_message("User created successfully")),
    ))
}
