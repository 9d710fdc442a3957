use std::sync::Arc;

use hub_core::store::PreferenceStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheaply cloneable; the store and config are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Owner of all preference and notification state.
    pub store: Arc<PreferenceStore>,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
}

impl AppState {
    /// State with a fresh, empty store.
    pub fn new(config: ServerConfig) -> Self {
        Self {
            store: Arc::new(PreferenceStore::new()),
            config: Arc::new(config),
        }
    }
}
