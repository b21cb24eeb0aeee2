use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

/// A message received from the Pub/Sub service.
///
/// Messages arrive as JSON objects with a topic identifier, the payload
/// text, and a timestamp. The service emits timestamps as UTC-naive
/// ISO-like strings with no zone suffix, so the raw string is kept as
/// received and interpreted as UTC when parsed.
///
/// This structure is used for deserialization of poll responses and for
/// persistence of cache snapshots.
///
/// # Fields
///
/// - `topic` - The name of the topic this message belongs to.
/// - `message` - The message text.
/// - `timestamp` - The publication time as sent by the service, e.g. `"2026-08-06T14:23:05"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub topic: String,
    pub message: String,
    pub timestamp: String,
}

impl Message {
    pub fn new(topic: &str, message: &str, timestamp: &str) -> Self {
        Self {
            topic: topic.to_string(),
            message: message.to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    /// Parses the raw timestamp as a UTC instant.
    ///
    /// Returns `None` when the string is not a recognizable timestamp;
    /// such messages are treated as already expired by the retention
    /// policy, never as fresh.
    pub fn published_at(&self) -> Option<DateTime<Utc>> {
        parse_utc(&self.timestamp)
    }
}

/// Interprets a zone-less timestamp string as UTC.
///
/// Accepts the service's `T`-separated naive form, the space-separated
/// variant, and strings that already carry an explicit offset.
pub fn parse_utc(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(naive) = raw.parse::<NaiveDateTime>() {
        return Some(naive.and_utc());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f") {
        return Some(naive.and_utc());
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}
