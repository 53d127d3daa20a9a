//! Relationship entity <-> model mapper

use hub_core::entities::{Relationship, ResourceKind};
use hub_core::value_objects::Snowflake;

use crate::models::RelationshipModel;

/// Build a Relationship from a ledger row plus the kind the table implies
pub fn relationship_from_model(model: RelationshipModel, kind: ResourceKind) -> Relationship {
    Relationship {
        user_id: Snowflake::new(model.user_id),
        resource_id: Snowflake::new(model.resource_id),
        kind,
        linked_at: model.linked_at,
    }
}
