//! User entity - a student or admin identified by an external Google account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Role a user holds within the hub
///
/// Promotion is one-directional: a student may become an admin, an admin
/// never reverts to student through this domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Student,
    Admin,
}

impl UserRole {
    /// Storage/string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Admin => "admin",
        }
    }
}

impl std::str::FromStr for UserRole {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "student" => Ok(Self::Student),
            "admin" => Ok(Self::Admin),
            other => Err(DomainError::InvalidRole(other.to_string())),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User entity
///
/// Created on first successful Google login; never deleted by the hub core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Snowflake,
    /// Stable subject identifier from the external identity provider
    pub google_id: String,
    pub email: String,
    pub name: String,
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new student user from a verified external identity
    pub fn new(id: Snowflake, google_id: String, email: String, name: String) -> Self {
        let now = Utc::now();
        Self {
            id,
            google_id,
            email,
            name,
            avatar_url: None,
            role: UserRole::Student,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }

    /// Promote to admin. Idempotent; there is no demotion.
    pub fn promote_to_admin(&mut self) {
        if self.role != UserRole::Admin {
            self.role = UserRole::Admin;
            self.updated_at = Utc::now();
        }
    }

    /// Refresh the profile fields supplied by the identity provider
    pub fn refresh_profile(&mut self, name: String, avatar_url: Option<String>) {
        if self.name != name || self.avatar_url != avatar_url {
            self.name = name;
            self.avatar_url = avatar_url;
            self.updated_at = Utc::now();
        }
    }
}
