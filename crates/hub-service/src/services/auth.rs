//! Authentication service
//!
//! Handles Google login, token refresh, and the current-user lookup. The
//! Google ID token is verified by the identity provider; this service only
//! ever sees the verified identity it yields.

use hub_core::entities::User;
use hub_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{AuthResponse, CurrentUserResponse, GoogleLoginRequest, RefreshTokenRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Authenticate with a Google ID token
    ///
    /// Verifies the token with the identity provider, then upserts the user
    /// keyed by the stable subject identifier: an existing user gets their
    /// profile refreshed, a new one is created as a student.
    #[instrument(skip(self, request))]
    pub async fn login_with_google(&self, request: GoogleLoginRequest) -> ServiceResult<AuthResponse> {
        let identity = self
            .ctx
            .identity_provider()
            .verify(&request.token)
            .await
            .map_err(ServiceError::from)?;

        let user = match self
            .ctx
            .user_repo()
            .find_by_google_id(&identity.subject)
            .await?
        {
            Some(mut user) => {
                user.refresh_profile(identity.name, identity.avatar_url);
                self.ctx.user_repo().update(&user).await?;
                user
            }
            None => {
                let user_id = self.ctx.generate_id();
                let mut user = User::new(user_id, identity.subject, identity.email, identity.name);
                user.avatar_url = identity.avatar_url;
                self.ctx.user_repo().create(&user).await?;

                info!(user_id = %user_id, "New user created from Google login");
                user
            }
        };

        info!(user_id = %user.id, "User logged in via Google");

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(ServiceError::from)?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Issue fresh tokens from a valid refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_refresh_token(&request.refresh_token)
            .map_err(ServiceError::from)?;
        let user_id = claims.user_id().map_err(ServiceError::from)?;

        // The user must still exist; tokens for deleted accounts die here
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id)
            .map_err(ServiceError::from)?;

        info!(user_id = %user.id, "Tokens refreshed");

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(&user),
        ))
    }

    /// Get the current authenticated user
    #[instrument(skip(self))]
    pub async fn current_user(&self, user_id: Snowflake) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }
}
