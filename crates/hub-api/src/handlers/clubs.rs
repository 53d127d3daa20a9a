//! Club handlers
//!
//! Public browsing, member listings, announcements, and admin CRUD.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use hub_service::{
    AnnouncementResponse, ClubMemberResponse, ClubResponse, ClubService,
    CreateAnnouncementRequest, CreateClubRequest, UpdateClubRequest,
};
use serde::Deserialize;

use crate::extractors::{AdminUser, OptionalAuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created, NoContent};
use crate::state::AppState;

/// Query parameters for club listing
#[derive(Debug, Default, Deserialize)]
pub struct ListClubsParams {
    pub search: Option<String>,
}

/// List clubs with optional name search
///
/// GET /clubs?search=&limit=&offset=
pub async fn list_clubs(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Query(params): Query<ListClubsParams>,
    pagination: Pagination,
) -> ApiResult<Json<Vec<ClubResponse>>> {
    let service = ClubService::new(state.service_context());
    let clubs = service
        .list_clubs(
            params.search.as_deref(),
            pagination.limit,
            pagination.offset,
            viewer.user_id(),
        )
        .await?;
    Ok(Json(clubs))
}

/// Get a single club
///
/// GET /clubs/{club_id}
pub async fn get_club(
    State(state): State<AppState>,
    viewer: OptionalAuthUser,
    Path(club_id): Path<String>,
) -> ApiResult<Json<ClubResponse>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let club = service.get_club(club_id, viewer.user_id()).await?;
    Ok(Json(club))
}

/// Create a new club (admin)
///
/// POST /clubs
pub async fn create_club(
    State(state): State<AppState>,
    admin: AdminUser,
    ValidatedJson(request): ValidatedJson<CreateClubRequest>,
) -> ApiResult<Created<Json<ClubResponse>>> {
    let service = ClubService::new(state.service_context());
    let club = service.create_club(admin.user_id, request).await?;
    Ok(Created(Json(club)))
}

/// Update a club (admin)
///
/// PUT /clubs/{club_id}
pub async fn update_club(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(club_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateClubRequest>,
) -> ApiResult<Json<ClubResponse>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let club = service.update_club(club_id, request).await?;
    Ok(Json(club))
}

/// Delete a club (admin)
///
/// DELETE /clubs/{club_id}
pub async fn delete_club(
    State(state): State<AppState>,
    _admin: AdminUser,
    Path(club_id): Path<String>,
) -> ApiResult<NoContent> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    service.delete_club(club_id).await?;
    Ok(NoContent)
}

/// List members of a club
///
/// GET /clubs/{club_id}/members
pub async fn club_members(
    State(state): State<AppState>,
    Path(club_id): Path<String>,
) -> ApiResult<Json<Vec<ClubMemberResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let members = service.club_members(club_id).await?;
    Ok(Json(members))
}

/// List announcements for a club
///
/// GET /clubs/{club_id}/announcements
pub async fn club_announcements(
    State(state): State<AppState>,
    Path(club_id): Path<String>,
) -> ApiResult<Json<Vec<AnnouncementResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let announcements = service.club_announcements(club_id).await?;
    Ok(Json(announcements))
}

/// Post an announcement to a club (admin)
///
/// POST /clubs/{club_id}/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(club_id): Path<String>,
    ValidatedJson(request): ValidatedJson<CreateAnnouncementRequest>,
) -> ApiResult<Created<Json<AnnouncementResponse>>> {
    let club_id = club_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid club_id format"))?;

    let service = ClubService::new(state.service_context());
    let announcement = service
        .create_announcement(club_id, admin.user_id, request)
        .await?;
    Ok(Created(Json(announcement)))
}
