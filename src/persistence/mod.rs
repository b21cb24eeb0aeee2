//! The `persistence` module stores and restores client state snapshots.
//!
//! Snapshots of the message cache and the subscribed-topic set are what
//! let a reload pick up where the previous run left off within one
//! session. Values are JSON under instance-scoped keys in an embedded
//! `sled` key-value store, so several client instances on the same
//! machine never collide.

pub mod sled_store;

pub use sled_store::SnapshotStore;

#[cfg(test)]
mod tests;
