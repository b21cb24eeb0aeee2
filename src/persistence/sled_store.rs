use serde::Serialize;
use serde::de::DeserializeOwned;
use sled::Db;
use tracing::warn;

/// Process-wide flag marking that a session has already started.
///
/// Deliberately not instance-scoped: one session spans every client
/// instance sharing the store.
const SESSION_ACTIVE_KEY: &str = "session_active";

/// Key-value adapter over an embedded sled database.
///
/// Each running client instance gets its own key namespace derived from
/// its instance identifier (the listening port), so the
/// `subscribed_topics_<port>` and `messages_<port>` keys of concurrent
/// instances stay disjoint. Writes that fail are logged and swallowed —
/// the in-memory state stays authoritative until the next successful
/// write — while reads treat anything unreadable as absent.
#[derive(Clone)]
pub struct SnapshotStore {
    db: Db,
    instance: String,
}

impl SnapshotStore {
    pub fn open(path: &str, instance: &str) -> sled::Result<Self> {
        let db = sled::open(path)?;
        Ok(Self {
            db,
            instance: instance.to_string(),
        })
    }

    pub fn topics_key(&self) -> String {
        format!("subscribed_topics_{}", self.instance)
    }

    pub fn messages_key(&self) -> String {
        format!("messages_{}", self.instance)
    }

    /// Serializes `value` as JSON and writes it under `key`.
    ///
    /// A failed write is not fatal for the caller; the next mutation
    /// retries persistence anyway.
    pub fn save<T: Serialize>(&self, key: &str, value: &T) {
        let serialized = match serde_json::to_vec(value) {
            Ok(data) => data,
            Err(e) => {
                warn!(key, error = %e, "failed to serialize snapshot");
                return;
            }
        };
        if let Err(e) = self.db.insert(key, serialized) {
            warn!(key, error = %e, "failed to persist snapshot");
        }
    }

    /// Reads and deserializes the value under `key`.
    ///
    /// A missing key, an unreadable store, and a malformed value all
    /// come back as `None` — persisted state that cannot be restored is
    /// equivalent to no persisted state.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.db.get(key) {
            Ok(Some(raw)) => match serde_json::from_slice(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!(key, error = %e, "discarding malformed snapshot");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!(key, error = %e, "failed to read snapshot");
                None
            }
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(e) = self.db.remove(key) {
            warn!(key, error = %e, "failed to remove snapshot");
        }
    }

    /// Whether a session marker from a previous load is present.
    pub fn session_active(&self) -> bool {
        matches!(self.db.get(SESSION_ACTIVE_KEY), Ok(Some(_)))
    }

    pub fn mark_session_active(&self) {
        if let Err(e) = self.db.insert(SESSION_ACTIVE_KEY, b"true".as_slice()) {
            warn!(error = %e, "failed to set session marker");
        }
    }

    /// Clears the session marker.
    ///
    /// The running client never calls this on its own; it models the
    /// external session-end signal that turns the next startup into a
    /// fresh session.
    pub fn end_session(&self) {
        if let Err(e) = self.db.remove(SESSION_ACTIVE_KEY) {
            warn!(error = %e, "failed to clear session marker");
        }
    }
}

impl std::fmt::Debug for SnapshotStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnapshotStore")
            .field("db", &"sled::Db")
            .field("instance", &self.instance)
            .finish()
    }
}
