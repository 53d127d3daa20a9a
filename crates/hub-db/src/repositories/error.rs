//! Error handling utilities for repositories

use hub_core::entities::ResourceKind;
use hub_core::error::DomainError;
use hub_core::value_objects::Snowflake;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
///
/// Connectivity failures become `StorageUnavailable` so callers can tell
/// "the store is down" apart from every other failure; anything else is an
/// internal error.
pub fn map_db_error(e: SqlxError) -> DomainError {
    match e {
        SqlxError::Io(_)
        | SqlxError::Tls(_)
        | SqlxError::PoolTimedOut
        | SqlxError::PoolClosed
        | SqlxError::Protocol(_) => DomainError::StorageUnavailable(e.to_string()),
        other => DomainError::InternalError(other.to_string()),
    }
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    map_db_error(e)
}

/// Create a "user not found" error
pub fn user_not_found(id: Snowflake) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create an "event not found" error
pub fn event_not_found(id: Snowflake) -> DomainError {
    DomainError::EventNotFound(id)
}

/// Create a "club not found" error
pub fn club_not_found(id: Snowflake) -> DomainError {
    DomainError::ClubNotFound(id)
}

/// Create the duplicate-relationship conflict for a kind
pub fn duplicate_relationship(kind: ResourceKind) -> DomainError {
    match kind {
        ResourceKind::Event => DomainError::AlreadyRegistered,
        ResourceKind::Club => DomainError::AlreadyMember,
    }
}

/// Create the absent-relationship error for a kind
pub fn relationship_not_found(kind: ResourceKind) -> DomainError {
    match kind {
        ResourceKind::Event => DomainError::RegistrationNotFound,
        ResourceKind::Club => DomainError::MembershipNotFound,
    }
}
