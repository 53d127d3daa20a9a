//! Club entity - a student club with a derived member count

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Club entity
///
/// The member count is derived from active memberships, never stored here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Club {
    pub id: Snowflake,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    /// Free-form label, unlike the fixed event category set
    pub category: Option<String>,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Club {
    /// Create a new club
    pub fn new(id: Snowflake, name: String, created_by: Snowflake) -> Self {
        let now = Utc::now();
        Self {
            id,
            name,
            description: None,
            logo_url: None,
            category: None,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }
}
