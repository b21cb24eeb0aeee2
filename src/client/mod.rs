//! The `client` module is the running subscriber instance.
//!
//! `Subscriber` owns the in-memory state (message cache, subscription
//! set, topic list), applies poll results to it, and performs the
//! user-facing subscribe/unsubscribe operations. `poller` wraps it in a
//! recurring, cancellable poll task.

pub mod poller;
pub mod subscriber;

pub use poller::{PollHandle, start_poll_loop};
pub use subscriber::{Subscriber, SubscriberState};
