//! Event database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for events table
#[derive(Debug, Clone, FromRow)]
pub struct EventModel {
    pub id: i64,
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub starts_at: DateTime<Utc>,
    pub venue: String,
    pub poster_url: Option<String>,
    pub max_participants: Option<i32>,
    pub status: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
