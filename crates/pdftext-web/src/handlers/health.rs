use axum::Json;
use chrono::Utc;

use crate::models::HealthResponse;

pub const SERVICE_NAME: &str = "PDF Extraction Service";

/// Unconditional liveness probe; there is no failure mode.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK",
        service: SERVICE_NAME,
        timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6f").to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}
