//! Route definitions
//!
//! All API routes organized by domain and mounted under /api/v1.

use axum::{routing::{delete, get, post, put}, Router};

use crate::handlers::{auth, clubs, events, health, registrations, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new()
        // API v1 endpoints
        .nest("/api/v1", api_v1_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(event_routes())
        .merge(club_routes())
        .merge(registration_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/google", post(auth::google_login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/me", get(auth::me))
        .route("/auth/logout", post(auth::logout))
}

/// User routes (admin)
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list_users))
        .route("/users/:user_id/make-admin", put(users::make_admin))
}

/// Event routes
fn event_routes() -> Router<AppState> {
    Router::new()
        .route("/events", get(events::list_events))
        .route("/events", post(events::create_event))
        .route("/events/:event_id", get(events::get_event))
        .route("/events/:event_id", put(events::update_event))
        .route("/events/:event_id", delete(events::delete_event))
}

/// Club routes
fn club_routes() -> Router<AppState> {
    Router::new()
        .route("/clubs", get(clubs::list_clubs))
        .route("/clubs", post(clubs::create_club))
        .route("/clubs/:club_id", get(clubs::get_club))
        .route("/clubs/:club_id", put(clubs::update_club))
        .route("/clubs/:club_id", delete(clubs::delete_club))
        .route("/clubs/:club_id/members", get(clubs::club_members))
        .route("/clubs/:club_id/announcements", get(clubs::club_announcements))
        .route("/clubs/:club_id/announcements", post(clubs::create_announcement))
}

/// Registration/membership ledger routes
fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/registrations/events/@me", get(registrations::my_registrations))
        .route("/registrations/events/:event_id", post(registrations::register_for_event))
        .route("/registrations/events/:event_id", delete(registrations::unregister_from_event))
        .route("/registrations/events/:event_id/users", get(registrations::event_attendees))
        .route("/registrations/clubs/@me", get(registrations::my_memberships))
        .route("/registrations/clubs/:club_id", post(registrations::join_club))
        .route("/registrations/clubs/:club_id", delete(registrations::leave_club))
}
