//! User handlers
//!
//! Admin-only user management endpoints.

use axum::{
    extract::{Path, State},
    Json,
};
use hub_service::{UserResponse, UserService};

use crate::extractors::AdminUser;
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// List all users (admin)
///
/// GET /users
pub async fn list_users(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> ApiResult<Json<Vec<UserResponse>>> {
    let service = UserService::new(state.service_context());
    let users = service.list_users().await?;
    Ok(Json(users))
}

/// Promote a user to admin (admin)
///
/// PUT /users/{user_id}/make-admin
pub async fn make_admin(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(user_id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let user_id = user_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid user_id format"))?;

    let service = UserService::new(state.service_context());
    let user = service.make_admin(user_id, admin.user_id).await?;
    Ok(Json(user))
}
