//! # SubPulse
//!
//! `subpulse` is a polling subscriber client for a topic-based Pub/Sub
//! service. It keeps a per-topic cache of recently received messages,
//! evicts entries older than a fixed retention window on every poll, and
//! persists the cache across restarts within a single session.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `cache`: The message cache — merge of freshly polled messages and time-windowed eviction.
//! - `client`: The running subscriber instance and the cancellable poll loop that drives it.
//! - `config`: Handles loading and managing client configuration.
//! - `persistence`: Stores and restores state snapshots in an embedded key-value store.
//! - `session`: The subscribed-topic set and the fresh-vs-continuing session decision.
//! - `transport`: Typed HTTP wrappers around the remote subscriber endpoints.
//! - `utils`: Contains shared utilities, such as error handling and logging setup.

pub mod cache;
pub mod client;
pub mod config;
pub mod persistence;
pub mod session;
pub mod transport;
pub mod utils;

#[cfg(test)]
mod tests;
