use chrono::{TimeDelta, Utc};

use super::engine::MessageCache;
use super::message::{Message, parse_utc};
use super::retention::RetentionPolicy;

fn naive(ts: chrono::DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%S").to_string()
}

#[test]
fn test_parse_utc_naive_timestamp() {
    let parsed = parse_utc("2026-08-06T14:23:05").unwrap();
    assert_eq!(parsed.to_rfc3339(), "2026-08-06T14:23:05+00:00");
}

#[test]
fn test_parse_utc_space_separated() {
    let parsed = parse_utc("2026-08-06 14:23:05").unwrap();
    assert_eq!(parsed.to_rfc3339(), "2026-08-06T14:23:05+00:00");
}

#[test]
fn test_parse_utc_explicit_offset() {
    let parsed = parse_utc("2026-08-06T14:23:05+02:00").unwrap();
    assert_eq!(parsed.to_rfc3339(), "2026-08-06T12:23:05+00:00");
}

#[test]
fn test_parse_utc_garbage() {
    assert!(parse_utc("not-a-timestamp").is_none());
    assert!(parse_utc("").is_none());
}

#[test]
fn test_fresh_within_window() {
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    let five_min_ago = now - TimeDelta::minutes(5);
    assert!(policy.is_fresh(&naive(five_min_ago), now));
}

#[test]
fn test_stale_outside_window() {
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    let sixteen_min_ago = now - TimeDelta::minutes(16);
    assert!(!policy.is_fresh(&naive(sixteen_min_ago), now));
}

#[test]
fn test_exactly_at_window_is_stale() {
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    let at_boundary = now - TimeDelta::seconds(900);
    assert!(!policy.is_fresh(&naive(at_boundary), now));
}

#[test]
fn test_future_timestamp_is_not_fresh() {
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    let in_one_minute = now + TimeDelta::minutes(1);
    assert!(!policy.is_fresh(&naive(in_one_minute), now));
}

#[test]
fn test_unparsable_timestamp_is_not_fresh() {
    let policy = RetentionPolicy::new(900);
    assert!(!policy.is_fresh("yesterday-ish", Utc::now()));
}

#[test]
fn test_merge_preserves_order() {
    let mut cache = MessageCache::new();
    let now = Utc::now();
    let m1 = Message::new("nba", "Buzzer beater!", &naive(now));
    let m2 = Message::new("nba", "Overtime!", &naive(now));

    cache.merge_incoming(vec![m1.clone(), m2.clone()]);

    assert_eq!(cache.messages("nba").unwrap(), &[m1, m2]);
}

#[test]
fn test_merge_keeps_duplicates() {
    let mut cache = MessageCache::new();
    let now = Utc::now();
    let msg = Message::new("nba", "Buzzer beater!", &naive(now));

    cache.merge_incoming(vec![msg.clone()]);
    cache.merge_incoming(vec![msg.clone()]);

    assert_eq!(cache.messages("nba").unwrap().len(), 2);
}

#[test]
fn test_merge_creates_topic_entries() {
    let mut cache = MessageCache::new();
    let now = Utc::now();
    cache.merge_incoming(vec![
        Message::new("nba", "tip-off", &naive(now)),
        Message::new("nfl", "kick-off", &naive(now)),
    ]);

    assert!(cache.contains_topic("nba"));
    assert!(cache.contains_topic("nfl"));
    assert_eq!(cache.topic_count(), 2);
}

#[test]
fn test_evict_removes_emptied_topic() {
    let mut cache = MessageCache::new();
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    let old = now - TimeDelta::minutes(30);
    cache.merge_incoming(vec![Message::new("nba", "ancient news", &naive(old))]);

    cache.evict_stale(&policy, now);

    assert!(!cache.contains_topic("nba"));
    assert!(cache.is_empty());
}

#[test]
fn test_evict_keeps_fresh_drops_stale() {
    let mut cache = MessageCache::new();
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    let fresh = Message::new("nfl", "Touchdown!", &naive(now - TimeDelta::minutes(5)));
    let stale = Message::new("nfl", "old score", &naive(now - TimeDelta::minutes(20)));
    cache.merge_incoming(vec![stale, fresh.clone()]);

    cache.evict_stale(&policy, now);

    assert_eq!(cache.messages("nfl").unwrap(), &[fresh]);
}

#[test]
fn test_evict_is_idempotent() {
    let mut cache = MessageCache::new();
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    cache.merge_incoming(vec![
        Message::new("nba", "fresh", &naive(now - TimeDelta::minutes(1))),
        Message::new("nba", "stale", &naive(now - TimeDelta::minutes(16))),
        Message::new("cricket", "stale", &naive(now - TimeDelta::hours(1))),
    ]);

    cache.evict_stale(&policy, now);
    let once = cache.clone();
    cache.evict_stale(&policy, now);

    assert_eq!(cache, once);
}

#[test]
fn test_evict_drops_unparsable_timestamps() {
    let mut cache = MessageCache::new();
    let policy = RetentionPolicy::new(900);
    cache.merge_incoming(vec![Message::new("nba", "broken clock", "???")]);

    cache.evict_stale(&policy, Utc::now());

    assert!(cache.is_empty());
}

#[test]
fn test_tick_with_no_incoming_still_evicts() {
    let mut cache = MessageCache::new();
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    cache.merge_incoming(vec![Message::new("nba", "fading", &naive(now - TimeDelta::minutes(10)))]);

    // No new traffic, but the window has since moved past the message.
    cache.tick(Vec::new(), &policy, now + TimeDelta::minutes(10));

    assert!(cache.is_empty());
}

#[test]
fn test_tick_end_to_end_window() {
    let mut cache = MessageCache::new();
    let policy = RetentionPolicy::new(900);
    let now = Utc::now();
    let msg = Message::new("nfl", "Touchdown!", &naive(now - TimeDelta::minutes(5)));

    cache.tick(vec![msg.clone()], &policy, now);
    assert_eq!(cache.messages("nfl").unwrap(), &[msg]);

    cache.tick(Vec::new(), &policy, now + TimeDelta::minutes(16));
    assert!(!cache.contains_topic("nfl"));
}

#[test]
fn test_snapshot_roundtrip() {
    let mut cache = MessageCache::new();
    let now = Utc::now();
    cache.merge_incoming(vec![
        Message::new("nba", "tip-off", &naive(now)),
        Message::new("nfl", "kick-off", &naive(now)),
    ]);

    let data = serde_json::to_vec(&cache).unwrap();
    let restored: MessageCache = serde_json::from_slice(&data).unwrap();

    assert_eq!(restored, cache);
}
