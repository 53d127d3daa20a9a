//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Announcement, Club, Event, EventCategory, EventStatus, Relationship, ResourceKind, User,
};
use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<User>>;

    /// Find user by the external identity subject
    async fn find_by_google_id(&self, google_id: &str) -> RepoResult<Option<User>>;

    /// Create a new user
    async fn create(&self, user: &User) -> RepoResult<()>;

    /// Update an existing user (profile fields and role)
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// All users, newest first
    async fn find_all(&self) -> RepoResult<Vec<User>>;
}

// ============================================================================
// Event Repository
// ============================================================================

/// Filter options for event listing
#[derive(Debug, Clone, Default)]
pub struct EventFilter {
    pub category: Option<EventCategory>,
    pub status: Option<EventStatus>,
    /// Case-insensitive title substring
    pub search: Option<String>,
    pub limit: i64,
    pub offset: i64,
}

#[async_trait]
pub trait EventRepository: Send + Sync {
    /// Find event by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Event>>;

    /// List events matching the filter, sorted by start time ascending
    async fn find_filtered(&self, filter: &EventFilter) -> RepoResult<Vec<Event>>;

    /// Create a new event
    async fn create(&self, event: &Event) -> RepoResult<()>;

    /// Update an existing event
    async fn update(&self, event: &Event) -> RepoResult<()>;

    /// Hard delete an event; its registrations cascade away with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Club Repository
// ============================================================================

#[async_trait]
pub trait ClubRepository: Send + Sync {
    /// Find club by ID
    async fn find_by_id(&self, id: Snowflake) -> RepoResult<Option<Club>>;

    /// List clubs, optionally filtered by a name substring, newest first
    async fn find_filtered(&self, search: Option<&str>, limit: i64, offset: i64)
        -> RepoResult<Vec<Club>>;

    /// Create a new club
    async fn create(&self, club: &Club) -> RepoResult<()>;

    /// Update an existing club
    async fn update(&self, club: &Club) -> RepoResult<()>;

    /// Hard delete a club; memberships and announcements cascade away with it
    async fn delete(&self, id: Snowflake) -> RepoResult<()>;
}

// ============================================================================
// Ledger Repository
// ============================================================================

/// The membership ledger: the set of active (user, resource) relationships
/// for both resource kinds.
///
/// Implementations MUST enforce the at-most-one-row-per-pair invariant at
/// the storage layer (a unique constraint on the pair), not with a
/// check-then-insert in application code - two concurrent `create` calls
/// for the same pair must leave exactly one row, with the loser seeing the
/// duplicate-relationship conflict. For events that define a participant
/// limit, the capacity check and the insert must happen inside one storage
/// transaction so the last slot cannot be sold twice.
#[async_trait]
pub trait LedgerRepository: Send + Sync {
    /// Insert a relationship for the pair.
    ///
    /// Fails with the kind-specific conflict error when the pair is already
    /// active, and with `EventFull` when an event's participant limit has
    /// been reached.
    async fn create(
        &self,
        user_id: Snowflake,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<Relationship>;

    /// Delete the relationship for the pair.
    ///
    /// Removing an absent pair reports the kind-specific not-found error;
    /// callers treat it as informational, not fatal.
    async fn remove(
        &self,
        user_id: Snowflake,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<()>;

    /// Whether the pair is currently active
    async fn is_active(
        &self,
        user_id: Snowflake,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<bool>;

    /// All active relationships the user holds for the kind, newest first
    async fn list_for_user(
        &self,
        user_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<Vec<Relationship>>;

    /// All active relationships referencing the resource, newest first
    async fn list_for_resource(
        &self,
        resource_id: Snowflake,
        kind: ResourceKind,
    ) -> RepoResult<Vec<Relationship>>;

    /// Derived count of active relationships referencing the resource.
    ///
    /// Computed from the relationship set at query time; there is no
    /// separately maintained counter that could drift.
    async fn count(&self, resource_id: Snowflake, kind: ResourceKind) -> RepoResult<i64>;
}

// ============================================================================
// Announcement Repository
// ============================================================================

#[async_trait]
pub trait AnnouncementRepository: Send + Sync {
    /// All announcements for a club, newest first
    async fn find_by_club(&self, club_id: Snowflake) -> RepoResult<Vec<Announcement>>;

    /// Create a new announcement
    async fn create(&self, announcement: &Announcement) -> RepoResult<()>;
}
