use axum::routing::get;
use axum::Router;

use crate::handlers::service;
use crate::state::AppState;

/// Mount `/` and `/health` at the root.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(service::service_info))
        .route("/health", get(service::health_check))
}
