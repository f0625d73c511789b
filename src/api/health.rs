//! Health check endpoint

use axum::Json;
use serde::Serialize;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub module: String,
    pub version: String,
}

/// GET /health
///
/// Liveness check for monitoring. No authentication.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        module: "camcade-scores".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}
