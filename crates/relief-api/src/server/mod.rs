//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use relief_common::{AppConfig, AppError, TokenVerifier};
use relief_db::{
    create_pool, PgForumRepository, PgManualRepository, PgPortalRepository, PgResourceRepository,
    PgUpdateRepository, PgVolunteerRepository,
};
use relief_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are mounted outside the middleware stack so probes are
/// never rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();
    let api = apply_middleware(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    health_routes().merge(api).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = relief_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    relief_db::MIGRATOR
        .run(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Token verifier for the identity provider's bearer tokens
    let token_verifier = TokenVerifier::new(&config.auth.token_secret);

    // Create repositories
    let portal_repo = Arc::new(PgPortalRepository::new(pool.clone()));
    let resource_repo = Arc::new(PgResourceRepository::new(pool.clone()));
    let volunteer_repo = Arc::new(PgVolunteerRepository::new(pool.clone()));
    let update_repo = Arc::new(PgUpdateRepository::new(pool.clone()));
    let forum_repo = Arc::new(PgForumRepository::new(pool.clone()));
    let manual_repo = Arc::new(PgManualRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .portal_repo(portal_repo)
        .resource_repo(resource_repo)
        .volunteer_repo(volunteer_repo)
        .update_repo(update_repo)
        .forum_repo(forum_repo)
        .manual_repo(manual_repo)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, token_verifier, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.api.port));

    let state = create_app_state(config).await?;
    let app = create_app(state);

    run_server(app, addr).await
}
