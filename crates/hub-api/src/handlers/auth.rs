//! Authentication handlers
//!
//! Endpoints for Google login, token refresh, current user, and logout.

use axum::{extract::State, Json};
use hub_service::{
    AuthResponse, AuthService, CurrentUserResponse, GoogleLoginRequest, RefreshTokenRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, NoContent};
use crate::state::AppState;

/// Login with a Google ID token
///
/// POST /auth/google
pub async fn google_login(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<GoogleLoginRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.login_with_google(request).await?;
    Ok(Json(response))
}

/// Refresh access token
///
/// POST /auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<Json<AuthResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;
    Ok(Json(response))
}

/// Get the current authenticated user
///
/// GET /auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<CurrentUserResponse>> {
    let service = AuthService::new(state.service_context());
    let response = service.current_user(auth.user_id).await?;
    Ok(Json(response))
}

/// Logout
///
/// POST /auth/logout
///
/// Session tokens are stateless; discarding them is the client's job. The
/// endpoint exists so the frontend has something to call and requires a
/// valid token, which doubles as a cheap session check.
pub async fn logout(_auth: AuthUser) -> ApiResult<NoContent> {
    Ok(NoContent)
}
