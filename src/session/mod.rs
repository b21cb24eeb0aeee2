//! The `session` module owns what the user has subscribed to and the
//! once-per-startup decision between a fresh and a continuing session.
//!
//! A fresh session starts empty and clears anything a previous session
//! persisted; a continuing session (a reload) restores the persisted
//! subscribed topics and message cache unchanged.

pub mod guard;
pub mod topics;

pub use guard::{SessionKind, SessionState, establish};
pub use topics::SubscribedTopics;
