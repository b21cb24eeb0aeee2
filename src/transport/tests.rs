use serde_json::json;

use super::http::{SubscriberApi, decode_messages};
use super::message::{SubscriberId, TopicRequest};

#[test]
fn test_subscriber_id_from_string() {
    let id: SubscriberId = serde_json::from_value(json!("sub-42")).unwrap();
    assert_eq!(id.into_string(), "sub-42");
}

#[test]
fn test_subscriber_id_from_number() {
    let id: SubscriberId = serde_json::from_value(json!(42)).unwrap();
    assert_eq!(id.into_string(), "42");
}

#[test]
fn test_topic_request_body_shape() {
    let body = serde_json::to_value(TopicRequest { topic: "nba" }).unwrap();
    assert_eq!(body, json!({ "topic": "nba" }));
}

#[test]
fn test_decode_messages_well_formed() {
    let raw = vec![
        json!({ "topic": "nba", "message": "tip-off", "timestamp": "2026-08-06T14:23:05" }),
        json!({ "topic": "nfl", "message": "kick-off", "timestamp": "2026-08-06T14:24:00" }),
    ];

    let messages = decode_messages(raw);

    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0].topic, "nba");
    assert_eq!(messages[1].message, "kick-off");
}

#[test]
fn test_decode_messages_skips_malformed_entries() {
    let raw = vec![
        json!({ "topic": "nba", "message": "tip-off", "timestamp": "2026-08-06T14:23:05" }),
        json!({ "topic": "nba" }),
        json!("not even an object"),
        json!({ "topic": 7, "message": "bad topic", "timestamp": "2026-08-06T14:23:05" }),
    ];

    let messages = decode_messages(raw);

    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].message, "tip-off");
}

#[test]
fn test_decode_messages_empty_response() {
    assert!(decode_messages(Vec::new()).is_empty());
}

#[test]
fn test_endpoint_urls_strip_trailing_slash() {
    let api = SubscriberApi::new("http://localhost:8080/");
    assert_eq!(api.base_url(), "http://localhost:8080");
}
