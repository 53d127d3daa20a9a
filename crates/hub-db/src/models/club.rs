//! Club database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for clubs table
#[derive(Debug, Clone, FromRow)]
pub struct ClubModel {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub category: Option<String>,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
