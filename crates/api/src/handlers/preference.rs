//! Handlers for `/users/{user_id}/preferences`.

use axum::extract::{Path, State};
use axum::Json;
use hub_core::preference::Preference;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /users/{user_id}/preferences
///
/// Returns the user's preference, creating the email-only default on first
/// access.
pub async fn get_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Json<Preference> {
    Json(state.store.get_or_create_preferences(&user_id).await)
}

/// PUT /users/{user_id}/preferences
///
/// Replaces the user's preference wholesale and echoes it back.
pub async fn put_preferences(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    AppJson(input): AppJson<Preference>,
) -> AppResult<Json<Preference>> {
    let written = state.store.set_preferences(&user_id, input).await;
    Ok(Json(written))
}
