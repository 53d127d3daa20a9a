//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Snowflake IDs are serialized as strings for JavaScript compatibility.

use chrono::{DateTime, Utc};
use hub_core::entities::{EventCategory, EventStatus, UserRole};
use serde::Serialize;

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

/// User response (admin listings, attendee lists, member lists)
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Event Responses
// ============================================================================

/// Event response with its derived registration count
#[derive(Debug, Clone, Serialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub category: EventCategory,
    pub starts_at: DateTime<Utc>,
    pub venue: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub poster_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_participants: Option<i32>,
    pub status: EventStatus,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub registration_count: i64,
    /// Present only when the request carried an authenticated user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_registered: Option<bool>,
}

// ============================================================================
// Club Responses
// ============================================================================

/// Club response with its derived member count
#[derive(Debug, Clone, Serialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
    pub member_count: i64,
    /// Present only when the request carried an authenticated user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_member: Option<bool>,
}

/// A club member with join time
#[derive(Debug, Serialize)]
pub struct ClubMemberResponse {
    pub user: UserResponse,
    pub joined_at: DateTime<Utc>,
}

// ============================================================================
// Ledger Responses
// ============================================================================

/// Outcome of a registration state change, with the fresh derived count
#[derive(Debug, Serialize)]
pub struct RegistrationStatusResponse {
    pub event_id: String,
    pub is_registered: bool,
    pub registration_count: i64,
}

/// Outcome of a membership state change, with the fresh derived count
#[derive(Debug, Serialize)]
pub struct MembershipStatusResponse {
    pub club_id: String,
    pub is_member: bool,
    pub member_count: i64,
}

/// One of the current user's event registrations, with event details
#[derive(Debug, Serialize)]
pub struct RegistrationResponse {
    pub event: EventResponse,
    pub registered_at: DateTime<Utc>,
}

/// One of the current user's club memberships, with club details
#[derive(Debug, Serialize)]
pub struct MembershipResponse {
    pub club: ClubResponse,
    pub joined_at: DateTime<Utc>,
}

/// A registered attendee of an event (admin view)
#[derive(Debug, Serialize)]
pub struct AttendeeResponse {
    pub user: UserResponse,
    pub registered_at: DateTime<Utc>,
}

// ============================================================================
// Announcement Responses
// ============================================================================

/// Club announcement response
#[derive(Debug, Clone, Serialize)]
pub struct AnnouncementResponse {
    pub id: String,
    pub club_id: String,
    pub title: String,
    pub body: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

/// Readiness probe response with dependency checks
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
}

impl ReadinessResponse {
    pub fn ready(database: bool) -> Self {
        Self {
            status: if database { "ready" } else { "degraded" },
            database,
        }
    }
}
