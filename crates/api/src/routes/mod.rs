pub mod notification;
pub mod preference;
pub mod service;

use axum::Router;

use crate::state::AppState;

/// Build the resource route tree.
///
/// ```text
/// /users/{user_id}/preferences                     get, replace
/// /notifications                                   list, submit
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(preference::router())
        .merge(notification::router())
}
