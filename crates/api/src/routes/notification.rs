//! Route definitions for the `/notifications` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::notification;
use crate::state::AppState;

/// ```text
/// GET    /notifications   -> list_notifications
/// POST   /notifications   -> submit_notification
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/notifications",
        get(notification::list_notifications).post(notification::submit_notification),
    )
}
