//! Route definitions for per-user preferences.

use axum::routing::get;
use axum::Router;

use crate::handlers::preference;
use crate::state::AppState;

/// ```text
/// GET    /users/{user_id}/preferences   -> get_preferences
/// PUT    /users/{user_id}/preferences   -> put_preferences
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/users/{user_id}/preferences",
        get(preference::get_preferences).put(preference::put_preferences),
    )
}
