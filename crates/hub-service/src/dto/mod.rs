//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateAnnouncementRequest, CreateClubRequest, CreateEventRequest, GoogleLoginRequest,
    RefreshTokenRequest, UpdateClubRequest, UpdateEventRequest,
};

// Re-export commonly used response types
pub use responses::{
    AnnouncementResponse, AttendeeResponse, AuthResponse, ClubMemberResponse, ClubResponse,
    CurrentUserResponse, EventResponse, HealthResponse, MembershipResponse,
    MembershipStatusResponse, ReadinessResponse, RegistrationResponse, RegistrationStatusResponse,
    UserResponse,
};

// Re-export mappers and helper structs
pub use mappers::{ClubWithMeta, EventWithMeta};
