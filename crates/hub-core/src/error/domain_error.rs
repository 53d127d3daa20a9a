//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::entities::EventStatus;
use crate::value_objects::Snowflake;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(Snowflake),

    #[error("Event not found: {0}")]
    EventNotFound(Snowflake),

    #[error("Club not found: {0}")]
    ClubNotFound(Snowflake),

    #[error("Registration not found")]
    RegistrationNotFound,

    #[error("Membership not found")]
    MembershipNotFound,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Already registered for this event")]
    AlreadyRegistered,

    #[error("Already a member of this club")]
    AlreadyMember,

    // =========================================================================
    // Capacity
    // =========================================================================
    #[error("Event is full ({registered} registered)")]
    EventFull { registered: i64 },

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Unknown role: {0}")]
    InvalidRole(String),

    #[error("Unknown event category: {0}")]
    InvalidCategory(String),

    #[error("Unknown event status: {0}")]
    InvalidStatus(String),

    #[error("Illegal status transition: {from} -> {to}")]
    InvalidStatusTransition { from: EventStatus, to: EventStatus },

    #[error("Registration is closed for this event")]
    RegistrationClosed,

    #[error("No fields to update")]
    EmptyUpdate,

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::EventNotFound(_) => "UNKNOWN_EVENT",
            Self::ClubNotFound(_) => "UNKNOWN_CLUB",
            Self::RegistrationNotFound => "UNKNOWN_REGISTRATION",
            Self::MembershipNotFound => "UNKNOWN_MEMBERSHIP",

            // Conflict
            Self::AlreadyRegistered => "ALREADY_REGISTERED",
            Self::AlreadyMember => "ALREADY_MEMBER",

            // Capacity
            Self::EventFull { .. } => "EVENT_FULL",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidRole(_) => "INVALID_ROLE",
            Self::InvalidCategory(_) => "INVALID_CATEGORY",
            Self::InvalidStatus(_) => "INVALID_STATUS",
            Self::InvalidStatusTransition { .. } => "INVALID_STATUS_TRANSITION",
            Self::RegistrationClosed => "REGISTRATION_CLOSED",
            Self::EmptyUpdate => "EMPTY_UPDATE",

            // Infrastructure
            Self::StorageUnavailable(_) => "STORAGE_UNAVAILABLE",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::EventNotFound(_)
                | Self::ClubNotFound(_)
                | Self::RegistrationNotFound
                | Self::MembershipNotFound
        )
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidRole(_)
                | Self::InvalidCategory(_)
                | Self::InvalidStatus(_)
                | Self::InvalidStatusTransition { .. }
                | Self::RegistrationClosed
                | Self::EmptyUpdate
        )
    }

    /// Check if this is a conflict error (duplicate relationship or full event)
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::AlreadyRegistered | Self::AlreadyMember | Self::EventFull { .. }
        )
    }

    /// Check if the underlying store could not be reached
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}
