//! In-memory preference store and notification log.
//!
//! A single mutex covers both the preference map and the log, so every
//! operation (including the get-or-create path) is atomic as a unit and the
//! log order is the global order in which appends acquired the lock. State
//! lives for the lifetime of the process only.

use std::collections::HashMap;

use tokio::sync::Mutex;

use crate::notification::Notification;
use crate::preference::Preference;

/// Concurrency-safe owner of all mutable service state.
///
/// Construct one at startup and share it behind an `Arc`. All reads return
/// clones; no reference into the store outlives a call.
#[derive(Debug, Default)]
pub struct PreferenceStore {
    inner: Mutex<StoreInner>,
}

#[derive(Debug, Default)]
struct StoreInner {
    preferences: HashMap<String, Preference>,
    notifications: Vec<Notification>,
}

impl PreferenceStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the stored preference for `user_id`, creating it first if the
    /// user has none.
    ///
    /// **Writes on miss.** An unseen user gets
    /// [`Preference::new_user_default`] persisted before it is returned, so
    /// later reads observe the same record. Lookup and insertion happen under
    /// one lock acquisition: concurrent first reads for the same user all
    /// see a single record.
    pub async fn get_or_create_preferences(&self, user_id: &str) -> Preference {
        let mut inner = self.inner.lock().await;
        if let Some(existing) = inner.preferences.get(user_id) {
            return existing.clone();
        }

        tracing::debug!(user_id, "Creating default preferences on first read");
        let created = Preference::new_user_default();
        inner
            .preferences
            .insert(user_id.to_owned(), created.clone());
        created
    }

    /// Replace (or create) the preference for `user_id`. Returns the value
    /// written.
    pub async fn set_preferences(&self, user_id: &str, preference: Preference) -> Preference {
        let mut inner = self.inner.lock().await;
        tracing::debug!(
            user_id,
            channels = preference.channels.len(),
            digest = preference.digest,
            "Replacing preferences"
        );
        inner
            .preferences
            .insert(user_id.to_owned(), preference.clone());
        preference
    }

    /// Append a notification to the end of the log.
    pub async fn append_notification(&self, notification: Notification) {
        self.inner.lock().await.notifications.push(notification);
    }

    /// Snapshot of the full log in insertion order.
    pub async fn list_notifications(&self) -> Vec<Notification> {
        self.inner.lock().await.notifications.clone()
    }

    /// Number of users with a stored preference.
    pub async fn preference_count(&self) -> usize {
        self.inner.lock().await.preferences.len()
    }

    /// Number of notifications in the log.
    pub async fn notification_count(&self) -> usize {
        self.inner.lock().await.notifications.len()
    }
}
