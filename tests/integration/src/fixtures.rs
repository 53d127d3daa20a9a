//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests, plus lightweight
//! mirrors of the API's request/response shapes.

use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Google login request carrying a stub identity token
#[derive(Debug, Serialize)]
pub struct GoogleLoginRequest {
    pub token: String,
}

impl GoogleLoginRequest {
    /// A fresh stub identity, unique within the test process
    pub fn unique() -> Self {
        Self {
            token: format!("itoken-{}", unique_suffix()),
        }
    }
}

/// Token refresh request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserResponse,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: String,
    pub created_at: String,
}

/// Create event request
#[derive(Debug, Serialize)]
pub struct CreateEventRequest {
    pub title: String,
    pub description: Option<String>,
    pub category: String,
    pub starts_at: String,
    pub venue: String,
    pub poster_url: Option<String>,
    pub max_participants: Option<i32>,
}

impl CreateEventRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Test Event {suffix}"),
            description: Some("An event for testing".to_string()),
            category: "Technical".to_string(),
            starts_at: "2026-09-15T10:00:00Z".to_string(),
            venue: "Main Auditorium".to_string(),
            poster_url: None,
            max_participants: None,
        }
    }

    pub fn with_capacity(cap: i32) -> Self {
        Self {
            max_participants: Some(cap),
            ..Self::unique()
        }
    }
}

/// Event response
#[derive(Debug, Deserialize)]
pub struct EventResponse {
    pub id: String,
    pub title: String,
    pub category: String,
    pub status: String,
    pub venue: String,
    pub registration_count: i64,
    pub is_registered: Option<bool>,
    pub max_participants: Option<i32>,
}

/// Create club request
#[derive(Debug, Serialize)]
pub struct CreateClubRequest {
    pub name: String,
    pub description: Option<String>,
    pub logo_url: Option<String>,
    pub category: Option<String>,
}

impl CreateClubRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test Club {suffix}"),
            description: Some("A club for testing".to_string()),
            logo_url: None,
            category: Some("Academic".to_string()),
        }
    }
}

/// Club response
#[derive(Debug, Deserialize)]
pub struct ClubResponse {
    pub id: String,
    pub name: String,
    pub member_count: i64,
    pub is_member: Option<bool>,
}

/// Registration status response
#[derive(Debug, Deserialize)]
pub struct RegistrationStatusResponse {
    pub event_id: String,
    pub is_registered: bool,
    pub registration_count: i64,
}

/// Membership status response
#[derive(Debug, Deserialize)]
pub struct MembershipStatusResponse {
    pub club_id: String,
    pub is_member: bool,
    pub member_count: i64,
}

/// Registration with embedded event
#[derive(Debug, Deserialize)]
pub struct RegistrationResponse {
    pub event: EventResponse,
    pub registered_at: String,
}

/// Membership with embedded club
#[derive(Debug, Deserialize)]
pub struct MembershipResponse {
    pub club: ClubResponse,
    pub joined_at: String,
}

/// Create announcement request
#[derive(Debug, Serialize)]
pub struct CreateAnnouncementRequest {
    pub title: String,
    pub body: String,
}

impl CreateAnnouncementRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            title: format!("Announcement {suffix}"),
            body: "Meeting this Friday in room 204.".to_string(),
        }
    }
}

/// Announcement response
#[derive(Debug, Deserialize)]
pub struct AnnouncementResponse {
    pub id: String,
    pub club_id: String,
    pub title: String,
    pub body: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}
