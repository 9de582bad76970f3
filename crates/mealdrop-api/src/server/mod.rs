//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::Router;
use mealdrop_common::{AppConfig, AppError, JwtService, MediaClient};
use mealdrop_db::{
    create_pool, run_migrations, PgDriverRepository, PgMenuRepository, PgOrderRepository,
    PgRestaurantRepository, PgUserRepository, PgVehicleRepository,
};
use mealdrop_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware_with_config;
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Extra allowance on top of the image cap for multipart framing
const BODY_LIMIT_HEADROOM: usize = 64 * 1024;

/// Build the complete Axum application with all routes and middleware
///
/// Health routes are merged after the middleware stack so probes are not
/// rate limited.
pub fn create_app(state: AppState) -> Router {
    let config = state.config();

    let router = create_router()
        // Axum caps request bodies at 2 MB by default, below the image cap
        .layer(DefaultBodyLimit::max(
            config.media.upload_max_bytes + BODY_LIMIT_HEADROOM,
        ));
    let router = apply_middleware_with_config(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );
    let router = router.merge(health_routes());

    router.with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Apply pending migrations
    run_migrations(&pool)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("Database migrations applied");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(&config.jwt.secret));

    // Create media upload client
    let media_client = MediaClient::new(&config.media)?;

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let restaurant_repo = Arc::new(PgRestaurantRepository::new(pool.clone()));
    let menu_repo = Arc::new(PgMenuRepository::new(pool.clone()));
    let driver_repo = Arc::new(PgDriverRepository::new(pool.clone()));
    let vehicle_repo = Arc::new(PgVehicleRepository::new(pool.clone()));
    let order_repo = Arc::new(PgOrderRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .user_repo(user_repo)
        .restaurant_repo(restaurant_repo)
        .menu_repo(menu_repo)
        .driver_repo(driver_repo)
        .vehicle_repo(vehicle_repo)
        .order_repo(order_repo)
        .jwt_service(jwt_service)
        .media_client(media_client)
        .transition_policy(config.orders.transition_policy())
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: &str) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.server.address();

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, &addr).await
}

/// Resolve when the process receives Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received Ctrl+C, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}
