//! Announcement entity - append-only club news

use chrono::{DateTime, Utc};

use crate::value_objects::Snowflake;

/// Club announcement
///
/// Append-only from the student perspective; admins create, nobody edits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Announcement {
    pub id: Snowflake,
    pub club_id: Snowflake,
    pub title: String,
    pub body: String,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
}

impl Announcement {
    pub fn new(
        id: Snowflake,
        club_id: Snowflake,
        title: String,
        body: String,
        created_by: Snowflake,
    ) -> Self {
        Self {
            id,
            club_id,
            title,
            body,
            created_by,
            created_at: Utc::now(),
        }
    }
}
