//! Event handlers
//!
//! Public browsing endpoints plus admin CRUD.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use hub_core::entities::{EventCategory, EventStatus};
use hub_core::traits::EventFilter;
use hub_service::{CreateEventRequest, EventResponse, EventService, UpdateEventRequest};
use serde::Deserialize;

use crate::extractors::{AdminUser, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for event listing
#[derive(Debug, Default, Deserialize)]
pub struct ListEventsParams {
    pub category: Option<String>,
    pub status: Option<String>,
    pub search: Option<String>,
}

/// List events with optional filters
///
/// GET /events?category=&status=&search=&limit=&offset=
pub async fn list_events(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Query(params): Query<ListEventsParams>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<EventResponse>>> {
    let category = params
        .category
        .map(|s| s.parse::<EventCategory>())
        .transpose()
        .map_err(|_| ApiError::invalid_query("Unknown event category"))?;
    let status = params
        .status
        .map(|s| s.parse::<EventStatus>())
        .transpose()
        .map_err(|_| ApiError::invalid_query("Unknown event status"))?;

    let filter = EventFilter {
        category,
        status,
        search: params.search,
        limit: pagination.limit,
        offset: pagination.offset,
    };

    let service = EventService::new(state.service_context());
    let events = service.list_events(filter, viewer.user_id()).await?;
    Ok(Json(events))
}

/// Get a single event
///
/// GET /events/{event_id}
pub async fn get_event(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(event_id): Path<String>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = event_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid event_id format"))?;

    let service = EventService::new(state.service_context());
    let event = service.get_event(event_id, viewer.user_id()).await?;
    Ok(Json(event))
}

/// Create a new event (admin)
///
/// POST /events
pub async fn create_event(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateEventRequest>,
) -> ApiResult<Created<Json<EventResponse>>> {
    let service = EventService::new(state.service_context());
    let event = service.create_event(admin.user_id, request).await?;
    Ok(Created(Json(event)))
}

/// Update an event (admin)
///
/// PUT /events/{event_id}
pub async fn update_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateEventRequest>,
) -> ApiResult<Json<EventResponse>> {
    let event_id = event_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid event_id format"))?;

    let service = EventService::new(state.service_context());
    let event = service.update_event(event_id, request).await?;
    Ok(Json(event))
}

/// Delete an event (admin)
///
/// DELETE /events/{event_id}
pub async fn delete_event(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(event_id): Path<String>,
) -> ApiResult<NoContent> {
    let event_id = event_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid event_id format"))?;

    let service = EventService::new(state.service_context());
    service.delete_event(event_id).await?;
    Ok(NoContent)
}
