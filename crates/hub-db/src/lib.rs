//! # hub-db
//!
//! Database layer implementing repository traits with PostgreSQL via SQLx.
//!
//! ## Overview
//!
//! This crate provides PostgreSQL implementations for all repository traits
//! defined in `hub-core`. It handles:
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity <-> Model mappers
//! - Repository implementations
//!
//! The ledger repository is the one place where correctness depends on the
//! storage layer: pair uniqueness is a unique constraint, and the event
//! capacity check shares a transaction with the insert.

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, create_pool_from_env, run_migrations, DatabaseConfig, PgPool};
pub use repositories::{
    PgAnnouncementRepository, PgClubRepository, PgEventRepository, PgLedgerRepository,
    PgUserRepository,
};
