//! User service
//!
//! Admin-facing user management: listings and the one-way admin promotion.
//! The admin check itself happens at the API boundary, which re-validates
//! the caller's role against the database on every privileged request.

use hub_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::UserResponse;

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// All users, newest first
    #[instrument(skip(self))]
    pub async fn list_users(&self) -> ServiceResult<Vec<UserResponse>> {
        let users = self.ctx.user_repo().find_all().await?;
        Ok(users.iter().map(UserResponse::from).collect())
    }

    /// Promote a user to admin
    ///
    /// Idempotent: promoting an existing admin changes nothing.
    #[instrument(skip(self))]
    pub async fn make_admin(
        &self,
        target_id: Snowflake,
        actor_id: Snowflake,
    ) -> ServiceResult<UserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(target_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", target_id.to_string()))?;

        if !user.is_admin() {
            user.promote_to_admin();
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %target_id, actor_id = %actor_id, "User promoted to admin");
        }

        Ok(UserResponse::from(&user))
    }
}
