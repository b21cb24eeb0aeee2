use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::cache::message::Message;
use crate::cache::retention::RetentionPolicy;

/// The per-topic cache of recently received messages.
///
/// Maps a topic name to the ordered sequence of messages received for it,
/// in insertion order. A topic key is present only while it holds at
/// least one message; after eviction an emptied topic is removed
/// entirely, so a missing key means "nothing fresh", not "unknown topic".
///
/// The cache is driven exclusively through [`MessageCache::tick`]: merge
/// in whatever the latest poll returned, then evict everything outside
/// the retention window. Merge and eviction exist as separate steps only
/// for this module and its tests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageCache {
    topics: HashMap<String, Vec<Message>>,
}

impl MessageCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends each incoming message to the sequence for its topic,
    /// creating the topic entry if absent.
    ///
    /// Nothing is filtered or dropped here — messages for topics the user
    /// never subscribed to are kept, and a message re-delivered by a
    /// later poll is appended again. The service's delivery guarantee is
    /// at-least-once as far as this client knows, so deduplicating on
    /// merge could hide genuinely repeated publishes.
    pub fn merge_incoming(&mut self, incoming: Vec<Message>) {
        for msg in incoming {
            self.topics.entry(msg.topic.clone()).or_default().push(msg);
        }
    }

    /// Drops every message that is no longer fresh under `policy` at
    /// `now`, then removes topics whose sequence became empty.
    ///
    /// The whole pass judges freshness against the single `now` snapshot
    /// handed in, so one eviction run cannot disagree with itself about
    /// which messages are stale. Running it twice with the same `now` is
    /// a no-op the second time.
    pub fn evict_stale(&mut self, policy: &RetentionPolicy, now: DateTime<Utc>) {
        for messages in self.topics.values_mut() {
            messages.retain(|msg| policy.is_fresh(&msg.timestamp, now));
        }
        self.topics.retain(|_, messages| !messages.is_empty());
    }

    /// One poll-driven update: merge the freshly fetched messages, then
    /// evict stale ones.
    ///
    /// An empty `incoming` still triggers eviction, so the cache
    /// self-cleans as long as the poll loop keeps running even when no
    /// new traffic arrives.
    pub fn tick(&mut self, incoming: Vec<Message>, policy: &RetentionPolicy, now: DateTime<Utc>) {
        self.merge_incoming(incoming);
        self.evict_stale(policy, now);
    }

    /// The messages currently cached for `topic`, in insertion order.
    pub fn messages(&self, topic: &str) -> Option<&[Message]> {
        self.topics.get(topic).map(Vec::as_slice)
    }

    pub fn contains_topic(&self, topic: &str) -> bool {
        self.topics.contains_key(topic)
    }

    pub fn topic_names(&self) -> impl Iterator<Item = &str> {
        self.topics.keys().map(String::as_str)
    }

    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    pub fn message_count(&self) -> usize {
        self.topics.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}
