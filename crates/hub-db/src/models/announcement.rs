//! Announcement database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for club_announcements table
#[derive(Debug, Clone, FromRow)]
pub struct AnnouncementModel {
    pub id: i64,
    pub club_id: i64,
    pub title: String,
    pub body: String,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
}
