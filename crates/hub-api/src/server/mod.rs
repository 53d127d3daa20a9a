//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use hub_common::auth::{GoogleIdentityProvider, IdentityProvider};
use hub_common::{AppConfig, AppError, JwtService};
use hub_core::SnowflakeGenerator;
use hub_db::{
    create_pool, run_migrations, PgAnnouncementRepository, PgClubRepository, PgEventRepository,
    PgLedgerRepository, PgUserRepository,
};
use hub_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let router = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    // Health endpoints sit outside the rate limiter so probes never starve
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState with the Google provider
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let identity_provider = Arc::new(GoogleIdentityProvider::new(config.google.client_id.clone()));
    create_app_state_with_identity(config, identity_provider).await
}

/// Initialize all dependencies with a caller-supplied identity provider
///
/// Tests inject a static provider here so login flows run without Google.
pub async fn create_app_state_with_identity(
    config: AppConfig,
    identity_provider: Arc<dyn IdentityProvider>,
) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = hub_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create Snowflake generator
    let snowflake_generator = Arc::new(SnowflakeGenerator::new(config.snowflake.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let event_repo = Arc::new(PgEventRepository::new(pool.clone()));
    let club_repo = Arc::new(PgClubRepository::new(pool.clone()));
    let ledger_repo = Arc::new(PgLedgerRepository::new(pool.clone()));
    let announcement_repo = Arc::new(PgAnnouncementRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .event_repo(event_repo)
        .club_repo(club_repo)
        .ledger_repo(ledger_repo)
        .announcement_repo(announcement_repo)
        .identity_provider(identity_provider)
        .jwt_service(jwt_service)
        .snowflake_generator(snowflake_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
