//! Club service
//!
//! Club CRUD, member listings, and announcements. Member counts are derived
//! from the ledger at read time.

use hub_core::entities::{Announcement, Club, ResourceKind};
use hub_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    AnnouncementResponse, ClubMemberResponse, ClubResponse, ClubWithMeta, CreateAnnouncementRequest,
    CreateClubRequest, UpdateClubRequest, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Club service
pub struct ClubService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ClubService<'a> {
    /// Create a new ClubService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attach the derived count and viewer flag to a club
    async fn with_meta(&self, club: Club, viewer: Option<Snowflake>) -> ServiceResult<ClubWithMeta> {
        let member_count = self
            .ctx
            .ledger_repo()
            .count(club.id, ResourceKind::Club)
            .await?;

        let is_member = match viewer {
            Some(user_id) => Some(
                self.ctx
                    .ledger_repo()
                    .is_active(user_id, club.id, ResourceKind::Club)
                    .await?,
            ),
            None => None,
        };

        Ok(ClubWithMeta {
            club,
            member_count,
            is_member,
        })
    }

    /// List clubs, optionally filtered by name substring
    #[instrument(skip(self))]
    pub async fn list_clubs(
        &self,
        search: Option<&str>,
        limit: i64,
        offset: i64,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<Vec<ClubResponse>> {
        let clubs = self
            .ctx
            .club_repo()
            .find_filtered(search, limit, offset)
            .await?;

        let mut responses = Vec::with_capacity(clubs.len());
        for club in clubs {
            responses.push(ClubResponse::from(self.with_meta(club, viewer).await?));
        }

        Ok(responses)
    }

    /// Get a single club with its member count
    #[instrument(skip(self))]
    pub async fn get_club(
        &self,
        club_id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<ClubResponse> {
        let club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Club", club_id.to_string()))?;

        Ok(ClubResponse::from(self.with_meta(club, viewer).await?))
    }

    /// Create a new club
    #[instrument(skip(self, request))]
    pub async fn create_club(
        &self,
        creator_id: Snowflake,
        request: CreateClubRequest,
    ) -> ServiceResult<ClubResponse> {
        let club_id = self.ctx.generate_id();

        let mut club = Club::new(club_id, request.name, creator_id);
        club.description = request.description;
        club.logo_url = request.logo_url;
        club.category = request.category;

        self.ctx.club_repo().create(&club).await?;

        info!(club_id = %club_id, creator_id = %creator_id, "Club created");

        Ok(ClubResponse::from(ClubWithMeta {
            club,
            member_count: 0,
            is_member: None,
        }))
    }

    /// Update a club
    #[instrument(skip(self, request))]
    pub async fn update_club(
        &self,
        club_id: Snowflake,
        request: UpdateClubRequest,
    ) -> ServiceResult<ClubResponse> {
        if request.is_empty() {
            return Err(ServiceError::from(hub_core::DomainError::EmptyUpdate));
        }

        let mut club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Club", club_id.to_string()))?;

        if let Some(name) = request.name {
            club.name = name;
        }
        if let Some(description) = request.description {
            club.description = Some(description);
        }
        if let Some(logo_url) = request.logo_url {
            club.logo_url = Some(logo_url);
        }
        if let Some(category) = request.category {
            club.category = Some(category);
        }

        self.ctx.club_repo().update(&club).await?;

        info!(club_id = %club_id, "Club updated");

        let meta = self.with_meta(club, None).await?;
        Ok(ClubResponse::from(meta))
    }

    /// Delete a club, cascading its memberships and announcements away
    #[instrument(skip(self))]
    pub async fn delete_club(&self, club_id: Snowflake) -> ServiceResult<()> {
        self.ctx.club_repo().delete(club_id).await?;

        info!(club_id = %club_id, "Club deleted");

        Ok(())
    }

    /// All members of a club, with user details
    #[instrument(skip(self))]
    pub async fn club_members(&self, club_id: Snowflake) -> ServiceResult<Vec<ClubMemberResponse>> {
        // 404 for unknown clubs rather than an empty member list
        let _club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Club", club_id.to_string()))?;

        let memberships = self
            .ctx
            .ledger_repo()
            .list_for_resource(club_id, ResourceKind::Club)
            .await?;

        let mut members = Vec::with_capacity(memberships.len());
        for membership in memberships {
            if let Some(user) = self.ctx.user_repo().find_by_id(membership.user_id).await? {
                members.push(ClubMemberResponse {
                    user: UserResponse::from(&user),
                    joined_at: membership.linked_at,
                });
            }
        }

        Ok(members)
    }

    /// All announcements for a club, newest first
    #[instrument(skip(self))]
    pub async fn club_announcements(
        &self,
        club_id: Snowflake,
    ) -> ServiceResult<Vec<AnnouncementResponse>> {
        let _club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Club", club_id.to_string()))?;

        let announcements = self.ctx.announcement_repo().find_by_club(club_id).await?;

        Ok(announcements.iter().map(AnnouncementResponse::from).collect())
    }

    /// Post a new announcement to a club
    #[instrument(skip(self, request))]
    pub async fn create_announcement(
        &self,
        club_id: Snowflake,
        author_id: Snowflake,
        request: CreateAnnouncementRequest,
    ) -> ServiceResult<AnnouncementResponse> {
        let _club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Club", club_id.to_string()))?;

        let announcement = Announcement::new(
            self.ctx.generate_id(),
            club_id,
            request.title,
            request.body,
            author_id,
        );

        self.ctx.announcement_repo().create(&announcement).await?;

        info!(club_id = %club_id, author_id = %author_id, "Announcement posted");

        Ok(AnnouncementResponse::from(&announcement))
    }
}
