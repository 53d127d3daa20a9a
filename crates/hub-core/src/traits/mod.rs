//! Repository traits (ports)

mod repositories;

pub use repositories::{
    AnnouncementRepository, ClubRepository, EventFilter, EventRepository, LedgerRepository,
    RepoResult, UserRepository,
};
