use tracing::info;

use crate::cache::MessageCache;
use crate::persistence::SnapshotStore;
use crate::session::topics::SubscribedTopics;

/// Outcome of the startup session check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionKind {
    /// No session marker was found: prior persisted state is discarded.
    Fresh,
    /// A marker from an earlier load is present: persisted state is reused.
    Continuing,
}

/// The in-memory state a startup hands to the subscriber runtime.
#[derive(Debug)]
pub struct SessionState {
    pub kind: SessionKind,
    pub subscribed: SubscribedTopics,
    pub cache: MessageCache,
}

/// Decides, once per startup, whether this is a fresh session or a
/// reload of an existing one.
///
/// Fresh: clear both persisted snapshots, set the session marker, and
/// start empty. Continuing: load whatever snapshots exist (absence or a
/// malformed snapshot just means empty). The transition to Fresh happens
/// at most once per session; only an external session-end signal
/// (`SnapshotStore::end_session`) can make it happen again.
pub fn establish(store: &SnapshotStore) -> SessionState {
    if !store.session_active() {
        store.remove(&store.topics_key());
        store.remove(&store.messages_key());
        store.mark_session_active();
        info!("fresh session, cleared persisted state");
        return SessionState {
            kind: SessionKind::Fresh,
            subscribed: SubscribedTopics::new(),
            cache: MessageCache::new(),
        };
    }

    let subscribed: SubscribedTopics = store.load(&store.topics_key()).unwrap_or_default();
    let cache: MessageCache = store.load(&store.messages_key()).unwrap_or_default();
    info!(
        topics = subscribed.len(),
        cached_messages = cache.message_count(),
        "continuing session, restored persisted state"
    );
    SessionState {
        kind: SessionKind::Continuing,
        subscribed,
        cache,
    }
}
