//! Domain entities

mod announcement;
mod club;
mod event;
mod relationship;
mod user;

pub use announcement::Announcement;
pub use club::Club;
pub use event::{Event, EventCategory, EventStatus};
pub use relationship::{Relationship, ResourceKind};
pub use user::{User, UserRole};
