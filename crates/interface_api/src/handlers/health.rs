//! Health check handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::dto::health::{HealthResponse, ReadinessResponse};
use crate::AppState;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Liveness endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: VERSION,
    })
}

/// Readiness endpoint; `503` while the database is unreachable
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let check = state.health.health_check().await;
    let (status, label) = if check.is_healthy() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "unavailable")
    };

    (
        status,
        Json(ReadinessResponse {
            status: label,
            version: VERSION,
            checks: vec![check],
        }),
    )
}
