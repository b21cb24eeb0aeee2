use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use futures::join;
use tracing::{debug, info, warn};

use crate::cache::{Message, MessageCache, RetentionPolicy};
use crate::persistence::SnapshotStore;
use crate::session::{SessionState, SubscribedTopics};
use crate::transport::SubscriberApi;
use crate::utils::SubscriberError;

/// The in-memory state a poll tick reads and writes.
///
/// The UI layer (out of scope here) observes this; the poll loop and the
/// subscribe/unsubscribe operations mutate it. Every mutation that
/// should survive a reload is followed by a snapshot write.
#[derive(Debug, Default)]
pub struct SubscriberState {
    pub subscriber_id: Option<String>,
    pub available_topics: Vec<String>,
    pub subscribed: SubscribedTopics,
    pub cache: MessageCache,
}

/// A running subscriber instance.
///
/// Locks on `state` are short and never held across an await: each
/// operation fetches first, then takes the lock to apply and persist.
pub struct Subscriber {
    api: SubscriberApi,
    store: SnapshotStore,
    policy: RetentionPolicy,
    state: Arc<Mutex<SubscriberState>>,
}

impl Subscriber {
    pub fn new(
        api: SubscriberApi,
        store: SnapshotStore,
        policy: RetentionPolicy,
        session: SessionState,
    ) -> Self {
        let state = SubscriberState {
            subscriber_id: None,
            available_topics: Vec::new(),
            subscribed: session.subscribed,
            cache: session.cache,
        };
        Self {
            api,
            store,
            policy,
            state: Arc::new(Mutex::new(state)),
        }
    }

    pub fn state(&self) -> Arc<Mutex<SubscriberState>> {
        self.state.clone()
    }

    /// Fetches the opaque subscriber id once at startup.
    ///
    /// Failure is logged and leaves the id unset; the client keeps
    /// working without one.
    pub async fn fetch_subscriber_id(&self) {
        match self.api.subscriber_id().await {
            Ok(id) => {
                info!(subscriber_id = %id, "connected to backend");
                self.state.lock().unwrap().subscriber_id = Some(id);
            }
            Err(e) => warn!(error = %e, "failed to fetch subscriber id"),
        }
    }

    /// Subscribes to `topic` on the remote service and records it.
    ///
    /// An empty topic is a user-input error, surfaced to the caller
    /// before any remote call. On acknowledgement the topic joins the
    /// subscribed set (no duplicate entry if it was already there) and
    /// the set is persisted.
    pub async fn subscribe(&self, topic: &str) -> Result<(), SubscriberError> {
        if topic.trim().is_empty() {
            return Err(SubscriberError::NoTopicSelected);
        }
        self.api.subscribe(topic).await?;

        let mut state = self.state.lock().unwrap();
        if state.subscribed.insert(topic) {
            info!(topic, "subscribed");
        }
        self.store.save(&self.store.topics_key(), &state.subscribed);
        Ok(())
    }

    /// Unsubscribes from `topic` on the remote service and forgets it.
    pub async fn unsubscribe(&self, topic: &str) -> Result<(), SubscriberError> {
        self.api.unsubscribe(topic).await?;

        let mut state = self.state.lock().unwrap();
        if state.subscribed.remove(topic) {
            info!(topic, "unsubscribed");
        }
        self.store.save(&self.store.topics_key(), &state.subscribed);
        Ok(())
    }

    /// One poll tick: fetch the topic list and fresh messages, merge and
    /// evict, persist the cache snapshot.
    ///
    /// Either fetch failing is logged and degrades gracefully — a failed
    /// message fetch behaves exactly like an empty one, so eviction still
    /// runs and the cache keeps self-cleaning; a failed topic fetch keeps
    /// the previous topic list.
    pub async fn poll_once(&self) {
        let (topics_res, messages_res) = join!(self.api.topics(), self.api.receive_messages());

        let incoming = match messages_res {
            Ok(messages) => messages,
            Err(e) => {
                warn!(error = %e, "failed to fetch messages");
                Vec::new()
            }
        };
        let topics = match topics_res {
            Ok(topics) => Some(topics),
            Err(e) => {
                warn!(error = %e, "failed to fetch topic list");
                None
            }
        };

        self.apply_tick(topics, incoming, Utc::now());
    }

    /// Applies one tick's fetched data to the in-memory state and
    /// persists the resulting cache snapshot.
    ///
    /// Split from `poll_once` so the merge/evict/persist sequence is
    /// testable without a backend; `now` is the single time snapshot the
    /// whole eviction pass judges freshness against.
    pub fn apply_tick(
        &self,
        topics: Option<Vec<String>>,
        incoming: Vec<Message>,
        now: DateTime<Utc>,
    ) {
        let mut state = self.state.lock().unwrap();
        if let Some(topics) = topics {
            state.available_topics = topics;
        }
        state.cache.tick(incoming, &self.policy, now);
        self.store.save(&self.store.messages_key(), &state.cache);
        debug!(
            topics = state.cache.topic_count(),
            messages = state.cache.message_count(),
            "cache updated"
        );
    }
}
