use axum::Json;
use crate::models::{HealthResponse, ReadyResponse, HEALTHY};
use tracing::debug;

/// Health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    debug!("Health check requested");
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        message: "Backend is running".to_string(),
    })
}

/// Readiness check endpoint
pub async fn ready_check() -> Json<ReadyResponse> {
    debug!("Readiness check requested");
    // Nothing to wait on: no database or cache behind this service.
    Json(ReadyResponse {
        status: "ready".to_string(),
        message: "Service is ready".to_string(),
    })
}
