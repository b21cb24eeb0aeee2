//! The `transport` module is responsible for communication with the
//! remote Pub/Sub service over HTTP.
//!
//! It defines the wire schemas for the subscriber endpoints and a typed
//! client wrapping them, so the rest of the crate never touches raw
//! JSON. Responses are validated entry by entry: a malformed message in
//! a poll response is skipped, not a reason to fail the whole batch.

pub mod http;
pub mod message;

pub use http::SubscriberApi;

#[cfg(test)]
mod tests;
