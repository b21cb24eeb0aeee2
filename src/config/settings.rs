use serde::Deserialize;

use crate::cache::retention::DEFAULT_WINDOW_SECS;

/// Top-level configuration settings for the client.
///
/// Includes settings for the remote backend and for this subscriber
/// instance.
#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
    pub backend: BackendSettings,
    pub subscriber: SubscriberSettings,
}

/// Configuration settings for the remote Pub/Sub backend.
#[derive(Debug, Deserialize, Clone)]
pub struct BackendSettings {
    /// Base URL of the service exposing the `/subscriber/*` endpoints.
    pub url: String,
}

/// Configuration settings for this subscriber instance.
///
/// The `port` doubles as the instance identifier that namespaces the
/// persisted snapshots, so two instances pointed at the same data
/// directory do not clobber each other.
#[derive(Debug, Deserialize, Clone)]
pub struct SubscriberSettings {
    pub port: u16,
    pub poll_interval_secs: u64,
    pub retention_window_secs: u64,
    pub data_dir: String,
}

/// Partial configuration settings loaded from files or environment.
///
/// Allows partial specification of settings. Missing values can be filled using defaults.
#[derive(Debug, Deserialize)]
pub struct PartialSettings {
    pub backend: Option<PartialBackendSettings>,
    pub subscriber: Option<PartialSubscriberSettings>,
}

/// Partial backend settings.
#[derive(Debug, Deserialize)]
pub struct PartialBackendSettings {
    pub url: Option<String>,
}

/// Partial subscriber settings.
#[derive(Debug, Deserialize)]
pub struct PartialSubscriberSettings {
    pub port: Option<u16>,
    pub poll_interval_secs: Option<u64>,
    pub retention_window_secs: Option<u64>,
    pub data_dir: Option<String>,
}

/// Provides default values for `Settings`.
///
/// Ensures the client has sensible defaults if no configuration is provided.
impl Default for Settings {
    fn default() -> Self {
        Self {
            backend: BackendSettings {
                url: "http://localhost:8080".to_string(),
            },
            subscriber: SubscriberSettings {
                port: 8080,
                poll_interval_secs: 5,
                retention_window_secs: DEFAULT_WINDOW_SECS,
                data_dir: "subpulse_db".to_string(),
            },
        }
    }
}
