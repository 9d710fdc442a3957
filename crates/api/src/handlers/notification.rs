//! Handlers for the `/notifications` resource.

use axum::extract::State;
use axum::Json;
use hub_core::intake;
use hub_core::notification::{Dispatch, Notification};

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// POST /notifications
///
/// Resolves the delivery channels for the request and records it.
pub async fn submit_notification(
    State(state): State<AppState>,
    AppJson(input): AppJson<Notification>,
) -> AppResult<Json<Dispatch>> {
    let dispatch = intake::submit(&state.store, input).await;
    Ok(Json(dispatch))
}

/// GET /notifications
///
/// Every accepted notification, oldest first.
pub async fn list_notifications(State(state): State<AppState>) -> Json<Vec<Notification>> {
    Json(state.store.list_notifications().await)
}
