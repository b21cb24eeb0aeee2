mod settings;

use crate::config::settings::PartialSettings;
use config::{Config, ConfigError, Environment, File};

pub use settings::{BackendSettings, Settings, SubscriberSettings};

/// Loads the configuration from the default file and environment variables
/// Merges the configuration with default values
/// Returns a `Settings` struct containing the backend and subscriber configurations
pub fn load_config() -> Result<Settings, ConfigError> {
    let builder = Config::builder()
        .add_source(File::with_name("config/default").required(false))
        .add_source(Environment::default().separator("_"));

    let config = builder.build()?;

    // Try to deserialize what is available
    let partial: PartialSettings = config.try_deserialize()?;

    // Merge with defaults
    let default = Settings::default();

    Ok(Settings {
        backend: BackendSettings {
            url: partial
                .backend
                .as_ref()
                .and_then(|b| b.url.clone())
                .unwrap_or(default.backend.url),
        },
        subscriber: SubscriberSettings {
            port: partial
                .subscriber
                .as_ref()
                .and_then(|s| s.port)
                .unwrap_or(default.subscriber.port),
            poll_interval_secs: partial
                .subscriber
                .as_ref()
                .and_then(|s| s.poll_interval_secs)
                .unwrap_or(default.subscriber.poll_interval_secs),
            retention_window_secs: partial
                .subscriber
                .as_ref()
                .and_then(|s| s.retention_window_secs)
                .unwrap_or(default.subscriber.retention_window_secs),
            data_dir: partial
                .subscriber
                .as_ref()
                .and_then(|s| s.data_dir.clone())
                .unwrap_or(default.subscriber.data_dir),
        },
    })
}
