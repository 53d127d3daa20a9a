//! Ledger service
//!
//! The registration/membership toggle: register/unregister for events, join/
//! leave clubs. Each pair of (user, resource) is either absent or active;
//! `register`/`join` move it to active, `unregister`/`leave` move it back.
//! The uniqueness and capacity invariants live in the ledger repository's
//! storage layer - this service adds the surrounding rules (terminal events
//! take no registrations) and projects the fresh derived count back to the
//! caller after every state change.

use hub_core::entities::ResourceKind;
use hub_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{
    AttendeeResponse, EventResponse, EventWithMeta, MembershipResponse, MembershipStatusResponse,
    RegistrationResponse, RegistrationStatusResponse, UserResponse,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Ledger service
pub struct LedgerService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> LedgerService<'a> {
    /// Create a new LedgerService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    // ========================================================================
    // Event registrations
    // ========================================================================

    /// Register the current user for an event
    #[instrument(skip(self))]
    pub async fn register_for_event(
        &self,
        user_id: Snowflake,
        event_id: Snowflake,
    ) -> ServiceResult<RegistrationStatusResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        if !event.accepts_registrations() {
            return Err(ServiceError::from(hub_core::DomainError::RegistrationClosed));
        }

        // Uniqueness and capacity are enforced inside the repository's
        // storage transaction; a concurrent duplicate or a race for the
        // last slot fails there, never here.
        self.ctx
            .ledger_repo()
            .create(user_id, event_id, ResourceKind::Event)
            .await?;

        let registration_count = self
            .ctx
            .ledger_repo()
            .count(event_id, ResourceKind::Event)
            .await?;

        info!(user_id = %user_id, event_id = %event_id, "User registered for event");

        Ok(RegistrationStatusResponse {
            event_id: event_id.to_string(),
            is_registered: true,
            registration_count,
        })
    }

    /// Unregister the current user from an event
    ///
    /// Removing an absent registration reports not-found; a second
    /// unregister in a row is therefore harmless to the count.
    #[instrument(skip(self))]
    pub async fn unregister_from_event(
        &self,
        user_id: Snowflake,
        event_id: Snowflake,
    ) -> ServiceResult<RegistrationStatusResponse> {
        self.ctx
            .ledger_repo()
            .remove(user_id, event_id, ResourceKind::Event)
            .await?;

        let registration_count = self
            .ctx
            .ledger_repo()
            .count(event_id, ResourceKind::Event)
            .await?;

        info!(user_id = %user_id, event_id = %event_id, "User unregistered from event");

        Ok(RegistrationStatusResponse {
            event_id: event_id.to_string(),
            is_registered: false,
            registration_count,
        })
    }

    /// The current user's registrations with event details, newest first
    #[instrument(skip(self))]
    pub async fn my_registrations(
        &self,
        user_id: Snowflake,
    ) -> ServiceResult<Vec<RegistrationResponse>> {
        let registrations = self
            .ctx
            .ledger_repo()
            .list_for_user(user_id, ResourceKind::Event)
            .await?;

        let mut responses = Vec::with_capacity(registrations.len());
        for registration in registrations {
            // Cascade deletion makes a dangling registration impossible;
            // a miss here just means the event vanished mid-listing.
            if let Some(event) = self
                .ctx
                .event_repo()
                .find_by_id(registration.resource_id)
                .await?
            {
                let registration_count = self
                    .ctx
                    .ledger_repo()
                    .count(event.id, ResourceKind::Event)
                    .await?;

                responses.push(RegistrationResponse {
                    event: EventResponse::from(EventWithMeta {
                        event,
                        registration_count,
                        is_registered: Some(true),
                    }),
                    registered_at: registration.linked_at,
                });
            }
        }

        Ok(responses)
    }

    /// All registered attendees of an event, with user details (admin view)
    #[instrument(skip(self))]
    pub async fn event_attendees(&self, event_id: Snowflake) -> ServiceResult<Vec<AttendeeResponse>> {
        let _event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        let registrations = self
            .ctx
            .ledger_repo()
            .list_for_resource(event_id, ResourceKind::Event)
            .await?;

        let mut attendees = Vec::with_capacity(registrations.len());
        for registration in registrations {
            if let Some(user) = self.ctx.user_repo().find_by_id(registration.user_id).await? {
                attendees.push(AttendeeResponse {
                    user: UserResponse::from(&user),
                    registered_at: registration.linked_at,
                });
            }
        }

        Ok(attendees)
    }

    // ========================================================================
    // Club memberships
    // ========================================================================

    /// Join a club as the current user
    #[instrument(skip(self))]
    pub async fn join_club(
        &self,
        user_id: Snowflake,
        club_id: Snowflake,
    ) -> ServiceResult<MembershipStatusResponse> {
        let _club = self
            .ctx
            .club_repo()
            .find_by_id(club_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Club", club_id.to_string()))?;

        self.ctx
            .ledger_repo()
            .create(user_id, club_id, ResourceKind::Club)
            .await?;

        let member_count = self.ctx.ledger_repo().count(club_id, ResourceKind::Club).await?;

        info!(user_id = %user_id, club_id = %club_id, "User joined club");

        Ok(MembershipStatusResponse {
            club_id: club_id.to_string(),
            is_member: true,
            member_count,
        })
    }

    /// Leave a club as the current user
    #[instrument(skip(self))]
    pub async fn leave_club(
        &self,
        user_id: Snowflake,
        club_id: Snowflake,
    ) -> ServiceResult<MembershipStatusResponse> {
        self.ctx
            .ledger_repo()
            .remove(user_id, club_id, ResourceKind::Club)
            .await?;

        let member_count = self.ctx.ledger_repo().count(club_id, ResourceKind::Club).await?;

        info!(user_id = %user_id, club_id = %club_id, "User left club");

        Ok(MembershipStatusResponse {
            club_id: club_id.to_string(),
            is_member: false,
            member_count,
        })
    }

    /// The current user's memberships with club details, newest first
    #[instrument(skip(self))]
    pub async fn my_memberships(&self, user_id: Snowflake) -> ServiceResult<Vec<MembershipResponse>> {
        let memberships = self
            .ctx
            .ledger_repo()
            .list_for_user(user_id, ResourceKind::Club)
            .await?;

        let mut responses = Vec::with_capacity(memberships.len());
        for membership in memberships {
            if let Some(club) = self
                .ctx
                .club_repo()
                .find_by_id(membership.resource_id)
                .await?
            {
                let member_count = self
                    .ctx
                    .ledger_repo()
                    .count(club.id, ResourceKind::Club)
                    .await?;

                responses.push(MembershipResponse {
                    club: crate::dto::ClubResponse::from(crate::dto::ClubWithMeta {
                        club,
                        member_count,
                        is_member: Some(true),
                    }),
                    joined_at: membership.linked_at,
                });
            }
        }

        Ok(responses)
    }
}
