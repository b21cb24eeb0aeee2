//! The `error` module defines the error types used within the `subpulse`
//! application.
//!
//! Transport and storage failures are recoverable by design — the poll
//! loop treats a failed fetch like an empty one and the next tick acts as
//! the retry — so these variants mostly flow into log statements. The
//! `NoTopicSelected` variant is different: it is a user-input problem and
//! is surfaced to the caller rather than logged as a system error.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SubscriberError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("storage error: {0}")]
    Storage(#[from] sled::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("no topic selected")]
    NoTopicSelected,
}
