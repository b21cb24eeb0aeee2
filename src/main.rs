use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tracing::{error, info};

use subpulse::cache::RetentionPolicy;
use subpulse::client::{Subscriber, start_poll_loop};
use subpulse::config::load_config;
use subpulse::persistence::SnapshotStore;
use subpulse::session::establish;
use subpulse::transport::SubscriberApi;
use subpulse::utils;

/// Polling subscriber client for a topic-based Pub/Sub service.
#[derive(Parser)]
#[command(name = "subpulse")]
struct Cli {
    /// Instance port; also namespaces this instance's persisted state
    #[arg(long)]
    port: Option<u16>,

    /// Base URL of the Pub/Sub backend
    #[arg(long)]
    backend_url: Option<String>,

    /// Topic to subscribe to at startup; may be repeated
    #[arg(long = "subscribe", value_name = "TOPIC")]
    subscribe: Vec<String>,
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    utils::logging::init("info");

    if let Err(e) = run(Cli::parse()).await {
        error!("Client failed: {}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = load_config()?;
    if let Some(port) = cli.port {
        config.subscriber.port = port;
    }
    if let Some(url) = cli.backend_url {
        config.backend.url = url;
    }

    let instance = config.subscriber.port.to_string();
    let store = SnapshotStore::open(&config.subscriber.data_dir, &instance)?;
    let session = establish(&store);
    info!(instance = %instance, backend = %config.backend.url, kind = ?session.kind, "starting subscriber");

    let api = SubscriberApi::new(config.backend.url.clone());
    let policy = RetentionPolicy::new(config.subscriber.retention_window_secs);
    let subscriber = Arc::new(Subscriber::new(api, store, policy, session));

    subscriber.fetch_subscriber_id().await;

    for topic in &cli.subscribe {
        if let Err(e) = subscriber.subscribe(topic).await {
            error!(topic = %topic, "Failed to subscribe: {}", e);
        }
    }

    let poll = start_poll_loop(
        subscriber.clone(),
        Duration::from_secs(config.subscriber.poll_interval_secs),
    );

    tokio::signal::ctrl_c().await?;
    info!("Shutdown signal received. Exiting gracefully.");
    poll.stop().await;

    Ok(())
}
