//! Event entity - a scheduled college event students can register for

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::value_objects::Snowflake;

/// Fixed event category set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EventCategory {
    Technical,
    Cultural,
    Sports,
}

impl EventCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Technical => "Technical",
            Self::Cultural => "Cultural",
            Self::Sports => "Sports",
        }
    }
}

impl std::str::FromStr for EventCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Technical" => Ok(Self::Technical),
            "Cultural" => Ok(Self::Cultural),
            "Sports" => Ok(Self::Sports),
            other => Err(DomainError::InvalidCategory(other.to_string())),
        }
    }
}

impl std::fmt::Display for EventCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event lifecycle status
///
/// `upcoming -> ongoing -> completed`, with `cancelled` reachable from any
/// non-terminal state. `completed` and `cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Upcoming,
    Ongoing,
    Completed,
    Cancelled,
}

impl EventStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Upcoming => "upcoming",
            Self::Ongoing => "ongoing",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Terminal states accept no further transitions
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Whether a transition to `next` is legal
    pub fn can_transition_to(&self, next: EventStatus) -> bool {
        if *self == next {
            return false;
        }
        match (*self, next) {
            (Self::Upcoming, Self::Ongoing | Self::Cancelled) => true,
            (Self::Ongoing, Self::Completed | Self::Cancelled) => true,
            _ => false,
        }
    }
}

impl std::str::FromStr for EventStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "upcoming" => Ok(Self::Upcoming),
            "ongoing" => Ok(Self::Ongoing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            other => Err(DomainError::InvalidStatus(other.to_string())),
        }
    }
}

impl std::fmt::Display for EventStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Event entity
///
/// `created_by` records the creating admin; it is a reference, not an
/// ownership lock. The registration count is never stored here - it is
/// always derived from the set of active registrations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: Snowflake,
    pub title: String,
    pub description: Option<String>,
    pub category: EventCategory,
    pub starts_at: DateTime<Utc>,
    pub venue: String,
    pub poster_url: Option<String>,
    pub max_participants: Option<i32>,
    pub status: EventStatus,
    pub created_by: Snowflake,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Create a new upcoming event
    pub fn new(
        id: Snowflake,
        title: String,
        category: EventCategory,
        starts_at: DateTime<Utc>,
        venue: String,
        created_by: Snowflake,
    ) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            description: None,
            category,
            starts_at,
            venue,
            poster_url: None,
            max_participants: None,
            status: EventStatus::Upcoming,
            created_by,
            created_at: now,
            updated_at: now,
        }
    }

    /// Move the event to a new lifecycle status, validating the transition
    pub fn transition_to(&mut self, next: EventStatus) -> Result<(), DomainError> {
        if !self.status.can_transition_to(next) {
            return Err(DomainError::InvalidStatusTransition {
                from: self.status,
                to: next,
            });
        }
        self.status = next;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Whether new registrations are accepted in the current status
    #[inline]
    pub fn accepts_registrations(&self) -> bool {
        !self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_event() -> Event {
        Event::new(
            Snowflake::new(10),
            "Hackathon".to_string(),
            EventCategory::Technical,
            Utc::now(),
            "Main Auditorium".to_string(),
            Snowflake::new(1),
        )
    }

    #[test]
    fn test_new_event_is_upcoming() {
        let event = sample_event();
        assert_eq!(event.status, EventStatus::Upcoming);
        assert!(event.accepts_registrations());
    }

    #[test]
    fn test_lifecycle_happy_path() {
        let mut event = sample_event();
        event.transition_to(EventStatus::Ongoing).unwrap();
        event.transition_to(EventStatus::Completed).unwrap();
        assert!(event.status.is_terminal());
        assert!(!event.accepts_registrations());
    }

    #[test]
    fn test_cancel_from_non_terminal() {
        let mut upcoming = sample_event();
        upcoming.transition_to(EventStatus::Cancelled).unwrap();

        let mut ongoing = sample_event();
        ongoing.transition_to(EventStatus::Ongoing).unwrap();
        ongoing.transition_to(EventStatus::Cancelled).unwrap();
    }

    #[test]
    fn test_terminal_states_reject_transitions() {
        let mut event = sample_event();
        event.transition_to(EventStatus::Cancelled).unwrap();
        assert!(event.transition_to(EventStatus::Ongoing).is_err());
        assert!(event.transition_to(EventStatus::Upcoming).is_err());

        let mut event = sample_event();
        event.transition_to(EventStatus::Ongoing).unwrap();
        event.transition_to(EventStatus::Completed).unwrap();
        assert!(event.transition_to(EventStatus::Cancelled).is_err());
    }

    #[test]
    fn test_skipping_ongoing_is_rejected() {
        let mut event = sample_event();
        assert!(event.transition_to(EventStatus::Completed).is_err());
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!(
            "Technical".parse::<EventCategory>().unwrap(),
            EventCategory::Technical
        );
        assert!("Music".parse::<EventCategory>().is_err());
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!(
            "upcoming".parse::<EventStatus>().unwrap(),
            EventStatus::Upcoming
        );
        assert!("paused".parse::<EventStatus>().is_err());
    }
}
