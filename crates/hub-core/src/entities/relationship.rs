//! Relationship entity - the membership ledger row
//!
//! A relationship links exactly one user to exactly one resource: an event
//! (registration) or a club (membership). For a given (user, resource, kind)
//! triple at most one active relationship exists at any time; the pair moves
//! between exactly two states, absent and active. Rows are hard-deleted on
//! removal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::Snowflake;

/// The two resource kinds the ledger tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Event,
    Club,
}

impl ResourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Event => "event",
            Self::Club => "club",
        }
    }
}

impl std::fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An active (user, resource) relationship
///
/// Identified by the (user_id, resource_id, kind) triple; there is no
/// surrogate id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    pub user_id: Snowflake,
    pub resource_id: Snowflake,
    pub kind: ResourceKind,
    pub linked_at: DateTime<Utc>,
}

impl Relationship {
    /// Create a relationship stamped with the current time
    pub fn new(user_id: Snowflake, resource_id: Snowflake, kind: ResourceKind) -> Self {
        Self {
            user_id,
            resource_id,
            kind,
            linked_at: Utc::now(),
        }
    }

    /// Whether this row links the given pair
    #[inline]
    pub fn links(&self, user_id: Snowflake, resource_id: Snowflake, kind: ResourceKind) -> bool {
        self.user_id == user_id && self.resource_id == resource_id && self.kind == kind
    }
}
