//! Delivery channel vocabulary.
//!
//! The set is closed: deserializing any other string fails, which is how the
//! HTTP boundary rejects unknown channels before the core is reached.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A symbolic transport a notification can be routed to.
///
/// No channel delivers anything in this service; the value is only recorded
/// and returned from resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryChannel {
    Email,
    Sms,
    Push,
    Webhook,
}

impl DeliveryChannel {
    /// Wire name of the channel (`"email"`, `"sms"`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            DeliveryChannel::Email => "email",
            DeliveryChannel::Sms => "sms",
            DeliveryChannel::Push => "push",
            DeliveryChannel::Webhook => "webhook",
        }
    }
}

impl fmt::Display for DeliveryChannel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
