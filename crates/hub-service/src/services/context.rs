//! Service context - dependency container for services
//!
//! Holds all repositories, the identity provider, and other dependencies
//! needed by services. Identity always flows through this context as an
//! explicit argument chain - no service reads ambient session state.

use std::sync::Arc;

use hub_common::auth::{IdentityProvider, JwtService};
use hub_core::traits::{
    AnnouncementRepository, ClubRepository, EventRepository, LedgerRepository, UserRepository,
};
use hub_core::SnowflakeGenerator;
use hub_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The external identity provider (Google token verification)
/// - JWT service for session tokens
/// - Snowflake generator for ID generation
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool (readiness checks)
    pool: PgPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    event_repo: Arc<dyn EventRepository>,
    club_repo: Arc<dyn ClubRepository>,
    ledger_repo: Arc<dyn LedgerRepository>,
    announcement_repo: Arc<dyn AnnouncementRepository>,

    // Services
    identity_provider: Arc<dyn IdentityProvider>,
    jwt_service: Arc<JwtService>,
    snowflake_generator: Arc<SnowflakeGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        user_repo: Arc<dyn UserRepository>,
        event_repo: Arc<dyn EventRepository>,
        club_repo: Arc<dyn ClubRepository>,
        ledger_repo: Arc<dyn LedgerRepository>,
        announcement_repo: Arc<dyn AnnouncementRepository>,
        identity_provider: Arc<dyn IdentityProvider>,
        jwt_service: Arc<JwtService>,
        snowflake_generator: Arc<SnowflakeGenerator>,
    ) -> Self {
        Self {
            pool,
            user_repo,
            event_repo,
            club_repo,
            ledger_repo,
            announcement_repo,
            identity_provider,
            jwt_service,
            snowflake_generator,
        }
    }

    // === Database Pool ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the event repository
    pub fn event_repo(&self) -> &dyn EventRepository {
        self.event_repo.as_ref()
    }

    /// Get the club repository
    pub fn club_repo(&self) -> &dyn ClubRepository {
        self.club_repo.as_ref()
    }

    /// Get the ledger repository
    pub fn ledger_repo(&self) -> &dyn LedgerRepository {
        self.ledger_repo.as_ref()
    }

    /// Get the announcement repository
    pub fn announcement_repo(&self) -> &dyn AnnouncementRepository {
        self.announcement_repo.as_ref()
    }

    // === Services ===

    /// Get the external identity provider
    pub fn identity_provider(&self) -> &dyn IdentityProvider {
        self.identity_provider.as_ref()
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Get the snowflake ID generator
    pub fn snowflake_generator(&self) -> &SnowflakeGenerator {
        self.snowflake_generator.as_ref()
    }

    /// Generate a new Snowflake ID
    pub fn generate_id(&self) -> hub_core::Snowflake {
        self.snowflake_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    event_repo: Option<Arc<dyn EventRepository>>,
    club_repo: Option<Arc<dyn ClubRepository>>,
    ledger_repo: Option<Arc<dyn LedgerRepository>>,
    announcement_repo: Option<Arc<dyn AnnouncementRepository>>,
    identity_provider: Option<Arc<dyn IdentityProvider>>,
    jwt_service: Option<Arc<JwtService>>,
    snowflake_generator: Option<Arc<SnowflakeGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn event_repo(mut self, repo: Arc<dyn EventRepository>) -> Self {
        self.event_repo = Some(repo);
        self
    }

    pub fn club_repo(mut self, repo: Arc<dyn ClubRepository>) -> Self {
        self.club_repo = Some(repo);
        self
    }

    pub fn ledger_repo(mut self, repo: Arc<dyn LedgerRepository>) -> Self {
        self.ledger_repo = Some(repo);
        self
    }

    pub fn announcement_repo(mut self, repo: Arc<dyn AnnouncementRepository>) -> Self {
        self.announcement_repo = Some(repo);
        self
    }

    pub fn identity_provider(mut self, provider: Arc<dyn IdentityProvider>) -> Self {
        self.identity_provider = Some(provider);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn snowflake_generator(mut self, generator: Arc<SnowflakeGenerator>) -> Self {
        self.snowflake_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool.ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.user_repo.ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.event_repo.ok_or_else(|| ServiceError::validation("event_repo is required"))?,
            self.club_repo.ok_or_else(|| ServiceError::validation("club_repo is required"))?,
            self.ledger_repo.ok_or_else(|| ServiceError::validation("ledger_repo is required"))?,
            self.announcement_repo
                .ok_or_else(|| ServiceError::validation("announcement_repo is required"))?,
            self.identity_provider
                .ok_or_else(|| ServiceError::validation("identity_provider is required"))?,
            self.jwt_service.ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.snowflake_generator
                .ok_or_else(|| ServiceError::validation("snowflake_generator is required"))?,
        ))
    }
}
