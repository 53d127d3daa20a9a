//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.

use chrono::{DateTime, Utc};
use hub_core::entities::{EventCategory, EventStatus};
use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// Google login request - carries the raw ID token from the frontend
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct GoogleLoginRequest {
    #[validate(length(min = 1, message = "Token must not be empty"))]
    pub token: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

// ============================================================================
// Event Requests
// ============================================================================

/// Create event request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub category: EventCategory,

    pub starts_at: DateTime<Utc>,

    #[validate(length(min = 1, max = 200, message = "Venue must be 1-200 characters"))]
    pub venue: String,

    pub poster_url: Option<String>,

    #[validate(range(min = 1, message = "Participant limit must be at least 1"))]
    pub max_participants: Option<i32>,
}

/// Update event request (all fields optional; an empty update is rejected)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateEventRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub category: Option<EventCategory>,

    pub starts_at: Option<DateTime<Utc>>,

    #[validate(length(min = 1, max = 200, message = "Venue must be 1-200 characters"))]
    pub venue: Option<String>,

    pub poster_url: Option<String>,

    #[validate(range(min = 1, message = "Participant limit must be at least 1"))]
    pub max_participants: Option<i32>,

    /// Target lifecycle status; validated against the transition rules
    pub status: Option<EventStatus>,
}

impl UpdateEventRequest {
    /// Whether the request changes anything at all
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.starts_at.is_none()
            && self.venue.is_none()
            && self.poster_url.is_none()
            && self.max_participants.is_none()
            && self.status.is_none()
    }
}

// ============================================================================
// Club Requests
// ============================================================================

/// Create club request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateClubRequest {
    #[validate(length(min = 1, max = 100, message = "Club name must be 1-100 characters"))]
    pub name: String,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub logo_url: Option<String>,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,
}

/// Update club request (all fields optional; an empty update is rejected)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateClubRequest {
    #[validate(length(min = 1, max = 100, message = "Club name must be 1-100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,

    pub logo_url: Option<String>,

    #[validate(length(max = 50, message = "Category must be at most 50 characters"))]
    pub category: Option<String>,
}

impl UpdateClubRequest {
    /// Whether the request changes anything at all
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.description.is_none()
            && self.logo_url.is_none()
            && self.category.is_none()
    }
}

// ============================================================================
// Announcement Requests
// ============================================================================

/// Create announcement request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 5000, message = "Body must be 1-5000 characters"))]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_event_update_detected() {
        assert!(UpdateEventRequest::default().is_empty());

        let request = UpdateEventRequest {
            title: Some("New title".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn test_empty_club_update_detected() {
        assert!(UpdateClubRequest::default().is_empty());

        let request = UpdateClubRequest {
            category: Some("Arts".to_string()),
            ..Default::default()
        };
        assert!(!request.is_empty());
    }

    #[test]
    fn test_event_request_validation() {
        let request = CreateEventRequest {
            title: String::new(),
            description: None,
            category: EventCategory::Technical,
            starts_at: Utc::now(),
            venue: "Hall A".to_string(),
            poster_url: None,
            max_participants: Some(0),
        };
        assert!(request.validate().is_err());
    }
}
