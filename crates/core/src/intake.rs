//! Notification intake: channel resolution and logging.
//!
//! An explicit, non-empty channel override on the request wins outright.
//! Otherwise the user's stored channels are used as they are, even when
//! empty; the email default only appears through first-read creation in the
//! store.

use crate::channels::DeliveryChannel;
use crate::notification::{Dispatch, Notification};
use crate::preference::Preference;
use crate::store::PreferenceStore;

/// Decide the channel set for `request` given the user's `preference`.
pub fn resolve_channels(request: &Notification, preference: &Preference) -> Vec<DeliveryChannel> {
    match request.channel_override() {
        Some(channels) => channels.to_vec(),
        None => preference.channels.clone(),
    }
}

/// Resolve channels for `notification`, record it in the log and report the
/// outcome.
///
/// Reading the preference creates the user's default record if none exists.
/// The request is logged as received, not with the resolved channels.
/// Intake never rejects.
pub async fn submit(store: &PreferenceStore, notification: Notification) -> Dispatch {
    let preference = store
        .get_or_create_preferences(&notification.user_id)
        .await;
    let channels = resolve_channels(&notification, &preference);

    tracing::info!(
        user_id = %notification.user_id,
        channels = channels.len(),
        overridden = notification.channel_override().is_some(),
        "Notification accepted"
    );

    let user_id = notification.user_id.clone();
    store.append_notification(notification).await;

    Dispatch {
        user_id,
        channels,
        accepted: true,
    }
}
