use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::debug;

use crate::client::subscriber::Subscriber;

/// Handle to a running poll loop.
///
/// Dropping the handle leaves the loop running; call [`PollHandle::stop`]
/// to tear it down. After `stop` returns, no further tick can fire.
pub struct PollHandle {
    shutdown: watch::Sender<bool>,
    task: JoinHandle<()>,
}

impl PollHandle {
    /// Signals the loop to stop and waits for the in-flight tick, if
    /// any, to finish.
    pub async fn stop(self) {
        let _ = self.shutdown.send(true);
        let _ = self.task.await;
    }
}

/// Spawns the recurring poll task for `subscriber`.
///
/// The first tick fires immediately so the cache is populated at
/// startup rather than after the first full period. Ticks are serialized
/// by construction: the loop awaits each tick body before asking the
/// interval for the next one, and a tick that overruns the period delays
/// the next instead of bursting to catch up.
pub fn start_poll_loop(subscriber: Arc<Subscriber>, period: Duration) -> PollHandle {
    let (shutdown, mut stop_rx) = watch::channel(false);

    let task = tokio::spawn(async move {
        let mut ticker = tokio::time::interval(period);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {
                    subscriber.poll_once().await;
                }
                changed = stop_rx.changed() => {
                    if changed.is_err() || *stop_rx.borrow() {
                        break;
                    }
                }
            }
        }
        debug!("poll loop stopped");
    });

    PollHandle { shutdown, task }
}
