//! Registration handlers
//!
//! The ledger surface: event registration and club membership toggles for
//! the current user, plus the admin attendee listing. Every state change
//! returns the fresh derived count so the client can re-render without a
//! second request.

use axum::{
    extract::{Path, State},
    Json,
};
use hub_service::{
    AttendeeResponse, LedgerService, MembershipResponse, MembershipStatusResponse,
    RegistrationResponse, RegistrationStatusResponse,
};

use crate::extractors::{AdminUser, AuthUser};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Register the current user for an event
///
/// POST /registrations/events/{event_id}
pub async fn register_for_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<String>,
) -> ApiResult<Created<Json<RegistrationStatusResponse>>> {
    let event_id = event_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid event_id format"))?;

    let service = LedgerService::new(state.service_context());
    let status = service.register_for_event(auth.user_id, event_id).await?;
    Ok(Created(Json(status)))
}

/// Unregister the current user from an event
///
/// DELETE /registrations/events/{event_id}
pub async fn unregister_from_event(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(event_id): Path<String>,
) -> ApiResult<Json<RegistrationStatusResponse>> {
    let event_id = event_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid event_id format"))?;

    let service = LedgerService::new(state.service_context());
    let status = service.unregister_from_event(auth.user_id, event_id).await?;
    Ok(Json(status))
}

/// List the current user's event registrations
///
/// GET /registrations/events/@me
pub async fn my_registrations(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<RegistrationResponse>>> {
    let service = LedgerService::new(state.service_context());
    let registrations = service.my_registrations(auth.user_id).await?;
    Ok(Json(registrations))
}

/// Join a club as the current user
///
/// POST /registrations/clubs/{club_id}
pub async fn join_club(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(club_id): Path<String>,
) -> ApiResult<Created<Json<MembershipStatusResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = LedgerService::new(state.service_context());
    let status = service.join_club(auth.user_id, club_id).await?;
    Ok(Created(Json(status)))
}

/// Leave a club as the current user
///
/// DELETE /registrations/clubs/{club_id}
pub async fn leave_club(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(club_id): Path<String>,
) -> ApiResult<Json<MembershipStatusResponse>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = LedgerService::new(state.service_context());
    let status = service.leave_club(auth.user_id, club_id).await?;
    Ok(Json(status))
}

/// List the current user's club memberships
///
/// GET /registrations/clubs/@me
pub async fn my_memberships(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<Vec<MembershipResponse>>> {
    let service = LedgerService::new(state.service_context());
    let memberships = service.my_memberships(auth.user_id).await?;
    Ok(Json(memberships))
}

/// List registered users for an event (admin)
///
/// GET /registrations/events/{event_id}/users
pub async fn event_attendees(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
) -> ApiResult<Json<Vec<AttendeeResponse>>> {
    let event_id = event_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid event_id format"))?;

    let service = LedgerService::new(state.service_context());
    let attendees = service.event_attendees(event_id).await?;
    Ok(Json(attendees))
}
