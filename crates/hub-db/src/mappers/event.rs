//! Event entity <-> model mapper

use hub_core::entities::Event;
use hub_core::error::DomainError;
use hub_core::value_objects::Snowflake;

use crate::models::EventModel;

/// Convert EventModel to Event entity
///
/// Fallible: category and status strings must parse to known variants.
impl TryFrom<EventModel> for Event {
    type Error = DomainError;

    fn try_from(model: EventModel) -> Result<Self, Self::Error> {
        Ok(Event {
            id: Snowflake::new(model.id),
            title: model.title,
            description: model.description,
            category: model.category.parse()?,
            starts_at: model.starts_at,
            venue: model.venue,
            poster_url: model.poster_url,
            max_participants: model.max_participants,
            status: model.status.parse()?,
            created_by: Snowflake::new(model.created_by),
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}
