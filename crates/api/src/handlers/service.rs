//! Service-level endpoints: identity and liveness.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::state::AppState;

/// Service identity payload.
#[derive(Debug, Serialize)]
pub struct ServiceInfo {
    pub service: String,
    pub version: String,
}

/// Liveness payload.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// GET /
pub async fn service_info(State(state): State<AppState>) -> Json<ServiceInfo> {
    Json(ServiceInfo {
        service: state.config.service_name.clone(),
        version: state.config.service_version.clone(),
    })
}

/// GET /health -- fixed OK payload; the store has no failure mode to report.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}
