//! User entity <-> model mapper

use hub_core::entities::User;
use hub_core::error::DomainError;
use hub_core::value_objects::Snowflake;

use crate::models::UserModel;

/// Convert UserModel to User entity
///
/// Fallible: the stored role string must parse to a known role.
impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: Snowflake::new(model.id),
            google_id: model.google_id,
            email: model.email,
            name: model.name,
            avatar_url: model.avatar_url,
            role: model.role.parse()?,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use hub_core::entities::UserRole;

    fn model(role: &str) -> UserModel {
        UserModel {
            id: 1,
            google_id: "g-1".to_string(),
            email: "ada@example.edu".to_string(),
            name: "Ada".to_string(),
            avatar_url: None,
            role: role.to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_maps_known_role() {
        let user = User::try_from(model("admin")).unwrap();
        assert_eq!(user.role, UserRole::Admin);
    }

    #[test]
    fn test_rejects_unknown_role() {
        assert!(User::try_from(model("superuser")).is_err());
    }
}
