//! Relationship database model
//!
//! Both ledger tables (event_registrations, club_memberships) share this
//! row shape; the queries alias their columns to it.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for a ledger row
#[derive(Debug, Clone, FromRow)]
pub struct RelationshipModel {
    pub user_id: i64,
    pub resource_id: i64,
    pub linked_at: DateTime<Utc>,
}
