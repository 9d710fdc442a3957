//! Per-user delivery preferences.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::channels::DeliveryChannel;

/// A daily suppression window in local wall-clock time.
///
/// `start` may be later than `end`, meaning the window wraps past midnight
/// (e.g. 22:00-07:00). The window is stored and returned as-is; nothing in
/// the service enforces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuietHours {
    #[serde(with = "wall_clock")]
    pub start: NaiveTime,
    #[serde(with = "wall_clock")]
    pub end: NaiveTime,
}

/// A user's stored default channel set and ancillary delivery settings.
///
/// Every field defaults when omitted from input: no channels, no digest, no
/// quiet window. The record materialized for a user on first read is
/// [`Preference::new_user_default`], which is not the same thing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preference {
    /// Ordered channel list. May be empty; duplicates are kept.
    #[serde(default)]
    pub channels: Vec<DeliveryChannel>,
    /// Stored only; no batching is implemented against it.
    #[serde(default)]
    pub digest: bool,
    /// Stored only; absent means no quiet window configured.
    #[serde(default)]
    pub quiet_hours: Option<QuietHours>,
}

impl Preference {
    /// The record created for a user whose preferences are read before ever
    /// being written: email only, no digest, no quiet hours.
    pub fn new_user_default() -> Self {
        Self {
            channels: vec![DeliveryChannel::Email],
            digest: false,
            quiet_hours: None,
        }
    }
}

/// Serde adapter for wall-clock times.
///
/// Accepts `HH:MM` as well as `HH:MM:SS` with an optional fraction; always
/// writes `HH:MM:SS`.
mod wall_clock {
    use chrono::NaiveTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    const OUTPUT_FORMAT: &str = "%H:%M:%S";

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&time.format(OUTPUT_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse(&raw).map_err(|e| de::Error::custom(format!("invalid time '{raw}': {e}")))
    }

    pub(super) fn parse(raw: &str) -> Result<NaiveTime, chrono::ParseError> {
        NaiveTime::parse_from_str(raw, "%H:%M:%S%.f")
            .or_else(|_| NaiveTime::parse_from_str(raw, "%H:%M"))
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn hm(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn new_user_default_is_email_only() {
        let pref = Preference::new_user_default();
        assert_eq!(pref.channels, vec![DeliveryChannel::Email]);
        assert!(!pref.digest);
        assert!(pref.quiet_hours.is_none());
    }

    #[test]
    fn omitted_fields_take_field_defaults() {
        let pref: Preference = serde_json::from_value(json!({})).unwrap();
        assert!(pref.channels.is_empty());
        assert!(!pref.digest);
        assert!(pref.quiet_hours.is_none());
    }

    #[test]
    fn accepts_hour_minute_times() {
        let pref: Preference = serde_json::from_value(json!({
            "channels": ["email", "push"],
            "digest": true,
            "quiet_hours": { "start": "22:00", "end": "07:00" },
        }))
        .unwrap();

        let quiet = pref.quiet_hours.unwrap();
        assert_eq!(quiet.start, hm(22, 0));
        assert_eq!(quiet.end, hm(7, 0));
    }

    #[test]
    fn accepts_times_with_seconds() {
        let quiet: QuietHours =
            serde_json::from_value(json!({ "start": "08:15:30", "end": "09:00:00.250" })).unwrap();
        assert_eq!(quiet.start, NaiveTime::from_hms_opt(8, 15, 30).unwrap());
        assert_eq!(quiet.end, NaiveTime::from_hms_milli_opt(9, 0, 0, 250).unwrap());
    }

    #[test]
    fn writes_times_with_seconds() {
        let quiet = QuietHours {
            start: hm(22, 0),
            end: hm(7, 30),
        };
        let value = serde_json::to_value(quiet).unwrap();
        assert_eq!(value, json!({ "start": "22:00:00", "end": "07:30:00" }));
    }

    #[test]
    fn rejects_out_of_range_time() {
        let result: Result<QuietHours, _> =
            serde_json::from_value(json!({ "start": "25:00", "end": "07:00" }));
        assert!(result.is_err());
    }

    #[test]
    fn rejects_non_time_string() {
        assert!(wall_clock::parse("late evening").is_err());
        assert!(wall_clock::parse("").is_err());
    }

    #[test]
    fn duplicate_channels_are_kept() {
        let pref: Preference =
            serde_json::from_value(json!({ "channels": ["sms", "sms", "email"] })).unwrap();
        assert_eq!(
            pref.channels,
            vec![
                DeliveryChannel::Sms,
                DeliveryChannel::Sms,
                DeliveryChannel::Email
            ]
        );
    }

    #[test]
    fn round_trips_through_json() {
        let pref = Preference {
            channels: vec![DeliveryChannel::Webhook],
            digest: true,
            quiet_hours: Some(QuietHours {
                start: hm(23, 0),
                end: hm(6, 0),
            }),
        };
        let back: Preference =
            serde_json::from_str(&serde_json::to_string(&pref).unwrap()).unwrap();
        assert_eq!(back, pref);
    }
}
