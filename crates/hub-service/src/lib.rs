//! # hub-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

// Re-export the service surface at crate root for handler ergonomics
pub use dto::*;
pub use services::{
    AuthService, ClubService, EventService, LedgerService, ServiceContext, ServiceContextBuilder,
    ServiceError, ServiceResult, UserService,
};
