//! Entity <-> model mappers

mod announcement;
mod club;
mod event;
mod relationship;
mod user;

pub use relationship::relationship_from_model;
