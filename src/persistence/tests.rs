use tempfile::tempdir;

use super::SnapshotStore;
use crate::cache::{Message, MessageCache};

fn create_test_store(instance: &str) -> (tempfile::TempDir, SnapshotStore) {
    let dir = tempdir().unwrap();
    let store = SnapshotStore::open(dir.path().to_str().unwrap(), instance).unwrap();
    (dir, store)
}

#[test]
fn test_save_and_load_roundtrip() {
    let (_dir, store) = create_test_store("8080");
    let topics = vec!["nba".to_string(), "nfl".to_string()];

    store.save(&store.topics_key(), &topics);
    let loaded: Option<Vec<String>> = store.load(&store.topics_key());

    assert_eq!(loaded, Some(topics));
}

#[test]
fn test_load_absent_key_is_none() {
    let (_dir, store) = create_test_store("8080");
    let loaded: Option<Vec<String>> = store.load("never_written");
    assert!(loaded.is_none());
}

#[test]
fn test_load_malformed_value_is_none() {
    let (_dir, store) = create_test_store("8080");

    // Write something that is valid JSON but not the expected shape.
    store.save(&store.messages_key(), &"just a string");
    let loaded: Option<MessageCache> = store.load(&store.messages_key());

    assert!(loaded.is_none());
}

#[test]
fn test_remove_clears_key() {
    let (_dir, store) = create_test_store("8080");
    store.save(&store.topics_key(), &vec!["nba".to_string()]);

    store.remove(&store.topics_key());

    let loaded: Option<Vec<String>> = store.load(&store.topics_key());
    assert!(loaded.is_none());
}

#[test]
fn test_instance_keys_are_disjoint() {
    let (_dir, store) = create_test_store("8080");
    assert_eq!(store.topics_key(), "subscribed_topics_8080");
    assert_eq!(store.messages_key(), "messages_8080");

    // A write under this instance's key is invisible under another's.
    store.save(&store.topics_key(), &vec!["nba".to_string()]);
    let other: Option<Vec<String>> = store.load("subscribed_topics_9090");
    assert!(other.is_none());
}

#[test]
fn test_session_marker_lifecycle() {
    let (_dir, store) = create_test_store("8080");
    assert!(!store.session_active());

    store.mark_session_active();
    assert!(store.session_active());

    store.end_session();
    assert!(!store.session_active());
}

#[test]
fn test_cache_snapshot_roundtrip() {
    let (_dir, store) = create_test_store("8080");
    let mut cache = MessageCache::new();
    cache.merge_incoming(vec![Message::new("nba", "tip-off", "2026-08-06T14:23:05")]);

    store.save(&store.messages_key(), &cache);
    let restored: Option<MessageCache> = store.load(&store.messages_key());

    assert_eq!(restored, Some(cache));
}
