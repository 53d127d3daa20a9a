//! Event service
//!
//! Event CRUD and listings. Every response carries the registration count
//! derived from the ledger at read time, plus the viewer's own registration
//! flag when the request is authenticated.

use hub_core::entities::{Event, ResourceKind};
use hub_core::traits::EventFilter;
use hub_core::Snowflake;
use tracing::{info, instrument};

use crate::dto::{CreateEventRequest, EventResponse, EventWithMeta, UpdateEventRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Event service
pub struct EventService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> EventService<'a> {
    /// Create a new EventService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attach the derived count and viewer flag to an event
    async fn with_meta(&self, event: Event, viewer: Option<Snowflake>) -> ServiceResult<EventWithMeta> {
        let registration_count = self
            .ctx
            .ledger_repo()
            .count(event.id, ResourceKind::Event)
            .await?;

        let is_registered = match viewer {
            Some(user_id) => Some(
                self.ctx
                    .ledger_repo()
                    .is_active(user_id, event.id, ResourceKind::Event)
                    .await?,
            ),
            None => None,
        };

        Ok(EventWithMeta {
            event,
            registration_count,
            is_registered,
        })
    }

    /// List events matching the filter
    #[instrument(skip(self, filter))]
    pub async fn list_events(
        &self,
        filter: EventFilter,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<Vec<EventResponse>> {
        let events = self.ctx.event_repo().find_filtered(&filter).await?;

        let mut responses = Vec::with_capacity(events.len());
        for event in events {
            responses.push(EventResponse::from(self.with_meta(event, viewer).await?));
        }

        Ok(responses)
    }

    /// Get a single event with its registration count
    #[instrument(skip(self))]
    pub async fn get_event(
        &self,
        event_id: Snowflake,
        viewer: Option<Snowflake>,
    ) -> ServiceResult<EventResponse> {
        let event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        Ok(EventResponse::from(self.with_meta(event, viewer).await?))
    }

    /// Create a new event
    #[instrument(skip(self, request))]
    pub async fn create_event(
        &self,
        creator_id: Snowflake,
        request: CreateEventRequest,
    ) -> ServiceResult<EventResponse> {
        let event_id = self.ctx.generate_id();

        let mut event = Event::new(
            event_id,
            request.title,
            request.category,
            request.starts_at,
            request.venue,
            creator_id,
        );
        event.description = request.description;
        event.poster_url = request.poster_url;
        event.max_participants = request.max_participants;

        self.ctx.event_repo().create(&event).await?;

        info!(event_id = %event_id, creator_id = %creator_id, "Event created");

        Ok(EventResponse::from(EventWithMeta {
            event,
            registration_count: 0,
            is_registered: None,
        }))
    }

    /// Update an event; a requested status change is validated against the
    /// lifecycle rules
    #[instrument(skip(self, request))]
    pub async fn update_event(
        &self,
        event_id: Snowflake,
        request: UpdateEventRequest,
    ) -> ServiceResult<EventResponse> {
        if request.is_empty() {
            return Err(ServiceError::from(hub_core::DomainError::EmptyUpdate));
        }

        let mut event = self
            .ctx
            .event_repo()
            .find_by_id(event_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Event", event_id.to_string()))?;

        if let Some(title) = request.title {
            event.title = title;
        }
        if let Some(description) = request.description {
            event.description = Some(description);
        }
        if let Some(category) = request.category {
            event.category = category;
        }
        if let Some(starts_at) = request.starts_at {
            event.starts_at = starts_at;
        }
        if let Some(venue) = request.venue {
            event.venue = venue;
        }
        if let Some(poster_url) = request.poster_url {
            event.poster_url = Some(poster_url);
        }
        if let Some(max_participants) = request.max_participants {
            event.max_participants = Some(max_participants);
        }
        if let Some(status) = request.status {
            event.transition_to(status)?;
        }

        self.ctx.event_repo().update(&event).await?;

        info!(event_id = %event_id, "Event updated");

        let meta = self.with_meta(event, None).await?;
        Ok(EventResponse::from(meta))
    }

    /// Delete an event, cascading its registrations away
    #[instrument(skip(self))]
    pub async fn delete_event(&self, event_id: Snowflake) -> ServiceResult<()> {
        self.ctx.event_repo().delete(event_id).await?;

        info!(event_id = %event_id, "Event deleted");

        Ok(())
    }
}
