//! The `utils` module provides a collection of utility functions and common
//! definitions used across the `subpulse` application.
//!
//! This module centralizes reusable components — the error taxonomy and
//! the tracing setup — to promote code consistency and reduce duplication.

pub mod error;
pub mod logging;

pub use error::SubscriberError;
