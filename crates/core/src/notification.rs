//! Notification requests and their intake result.

use serde::{Deserialize, Serialize};

use crate::channels::DeliveryChannel;

/// A notification request. Immutable once accepted into the log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Target user. Not checked against the preference store.
    pub user_id: String,
    pub title: String,
    pub body: String,
    /// Explicit channel override. `None` or an empty list falls back to the
    /// user's stored preference.
    #[serde(default)]
    pub channels: Option<Vec<DeliveryChannel>>,
}

impl Notification {
    /// The override channels, if a non-empty override was given.
    pub fn channel_override(&self) -> Option<&[DeliveryChannel]> {
        self.channels.as_deref().filter(|c| !c.is_empty())
    }
}

/// Outcome of submitting a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dispatch {
    pub user_id: String,
    /// Channels the notification resolved to.
    pub channels: Vec<DeliveryChannel>,
    /// Always `true`; intake has no rejection path.
    pub accepted: bool,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn channels_are_optional() {
        let n: Notification =
            serde_json::from_value(json!({ "user_id": "u1", "title": "t", "body": "b" })).unwrap();
        assert!(n.channels.is_none());
        assert!(n.channel_override().is_none());
    }

    #[test]
    fn null_channels_mean_no_override() {
        let n: Notification = serde_json::from_value(
            json!({ "user_id": "u1", "title": "t", "body": "b", "channels": null }),
        )
        .unwrap();
        assert!(n.channel_override().is_none());
    }

    #[test]
    fn empty_override_is_ignored() {
        let n: Notification = serde_json::from_value(
            json!({ "user_id": "u1", "title": "t", "body": "b", "channels": [] }),
        )
        .unwrap();
        assert_eq!(n.channels, Some(vec![]));
        assert!(n.channel_override().is_none());
    }

    #[test]
    fn missing_body_is_rejected() {
        let result: Result<Notification, _> =
            serde_json::from_value(json!({ "user_id": "u1", "title": "t" }));
        assert!(result.is_err());
    }

    #[test]
    fn unknown_override_channel_is_rejected() {
        let result: Result<Notification, _> = serde_json::from_value(
            json!({ "user_id": "u1", "title": "t", "body": "b", "channels": ["fax"] }),
        );
        assert!(result.is_err());
    }
}
