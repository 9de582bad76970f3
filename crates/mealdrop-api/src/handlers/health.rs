//! Health check handler
//!
//! Liveness probe with a database ping.

use axum::{extract::State, http::StatusCode, Json};
use mealdrop_service::HealthResponse;

use crate::state::AppState;

/// Health check with database connectivity
///
/// GET /health
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let db_healthy = state
        .service_context()
        .pool()
        .acquire()
        .await
        .map(|_| true)
        .unwrap_or(false);

    let response = HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        database: if db_healthy { "connected" } else { "disconnected" },
    };

    let status = if db_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
