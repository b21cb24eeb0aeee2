use chrono::{DateTime, TimeDelta, Utc};

use crate::cache::message;

/// Default retention window for cached messages: 15 minutes.
pub const DEFAULT_WINDOW_SECS: u64 = 15 * 60;

/// Decides whether a timestamped message is still fresh.
///
/// A message is fresh when its timestamp parsed successfully and its age
/// relative to `now` is inside the retention window. The age must be
/// non-negative: a future-dated timestamp (clock skew on the publisher)
/// is not fresh and will not keep a topic alive.
///
/// The policy is a pure predicate; it never fails, it only answers false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetentionPolicy {
    window: TimeDelta,
}

impl RetentionPolicy {
    pub fn new(window_secs: u64) -> Self {
        Self {
            window: TimeDelta::seconds(window_secs as i64),
        }
    }

    pub fn window(&self) -> TimeDelta {
        self.window
    }

    /// Returns true iff `raw_timestamp` parses as UTC and `0 <= now - t < window`.
    pub fn is_fresh(&self, raw_timestamp: &str, now: DateTime<Utc>) -> bool {
        match message::parse_utc(raw_timestamp) {
            Some(published) => {
                let age = now.signed_duration_since(published);
                age >= TimeDelta::zero() && age < self.window
            }
            None => false,
        }
    }
}

impl Default for RetentionPolicy {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_SECS)
    }
}
