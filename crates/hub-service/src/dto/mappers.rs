//! Entity -> DTO mappers

use hub_core::entities::{Announcement, Club, Event, User};

use super::responses::{
    AnnouncementResponse, ClubResponse, CurrentUserResponse, EventResponse, UserResponse,
};

impl From<&User> for CurrentUserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
            avatar_url: user.avatar_url.clone(),
            role: user.role,
            created_at: user.created_at,
        }
    }
}

/// An event joined with its derived count and the viewer's registration flag
#[derive(Debug, Clone)]
pub struct EventWithMeta {
    pub event: Event,
    pub registration_count: i64,
    /// None for anonymous requests
    pub is_registered: Option<bool>,
}

impl From<EventWithMeta> for EventResponse {
    fn from(meta: EventWithMeta) -> Self {
        let event = meta.event;
        Self {
            id: event.id.to_string(),
            title: event.title,
            description: event.description,
            category: event.category,
            starts_at: event.starts_at,
            venue: event.venue,
            poster_url: event.poster_url,
            max_participants: event.max_participants,
            status: event.status,
            created_by: event.created_by.to_string(),
            created_at: event.created_at,
            registration_count: meta.registration_count,
            is_registered: meta.is_registered,
        }
    }
}

/// A club joined with its derived count and the viewer's membership flag
#[derive(Debug, Clone)]
pub struct ClubWithMeta {
    pub club: Club,
    pub member_count: i64,
    /// None for anonymous requests
    pub is_member: Option<bool>,
}

impl From<ClubWithMeta> for ClubResponse {
    fn from(meta: ClubWithMeta) -> Self {
        let club = meta.club;
        Self {
            id: club.id.to_string(),
            name: club.name,
            description: club.description,
            logo_url: club.logo_url,
            category: club.category,
            created_by: club.created_by.to_string(),
            created_at: club.created_at,
            member_count: meta.member_count,
            is_member: meta.is_member,
        }
    }
}

impl From<&Announcement> for AnnouncementResponse {
    fn from(announcement: &Announcement) -> Self {
        Self {
            id: announcement.id.to_string(),
            club_id: announcement.club_id.to_string(),
            title: announcement.title.clone(),
            body: announcement.body.clone(),
            created_by: announcement.created_by.to_string(),
            created_at: announcement.created_at,
        }
    }
}
