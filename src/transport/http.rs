use tracing::warn;

use crate::cache::Message;
use crate::transport::message::{SubscriberId, TopicRequest};
use crate::utils::SubscriberError;

/// Typed client for the remote subscriber endpoints.
///
/// All calls return `SubscriberError` on network or decode failure;
/// recovery policy (log and let the next poll retry) belongs to the
/// caller, not here.
#[derive(Debug, Clone)]
pub struct SubscriberApi {
    base_url: String,
    http: reqwest::Client,
}

impl SubscriberApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/subscriber/{}", self.base_url, path)
    }

    /// `GET /subscriber/getSubscriberId`
    pub async fn subscriber_id(&self) -> Result<String, SubscriberError> {
        let id: SubscriberId = self
            .http
            .get(self.endpoint("getSubscriberId"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(id.into_string())
    }

    /// `GET /subscriber/getTopics`
    pub async fn topics(&self) -> Result<Vec<String>, SubscriberError> {
        let topics = self
            .http
            .get(self.endpoint("getTopics"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(topics)
    }

    /// `GET /subscriber/receiveMessages`
    ///
    /// Entries that do not match the message schema are skipped with a
    /// warning; one malformed entry must not cost the rest of the batch.
    pub async fn receive_messages(&self) -> Result<Vec<Message>, SubscriberError> {
        let raw: Vec<serde_json::Value> = self
            .http
            .get(self.endpoint("receiveMessages"))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        Ok(decode_messages(raw))
    }

    /// `POST /subscriber/subscribe {topic}`
    pub async fn subscribe(&self, topic: &str) -> Result<(), SubscriberError> {
        self.http
            .post(self.endpoint("subscribe"))
            .json(&TopicRequest { topic })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    /// `POST /subscriber/unsubscribe {topic}`
    pub async fn unsubscribe(&self, topic: &str) -> Result<(), SubscriberError> {
        self.http
            .post(self.endpoint("unsubscribe"))
            .json(&TopicRequest { topic })
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }
}

/// Keeps the well-formed entries of a poll response, logging the rest.
pub fn decode_messages(raw: Vec<serde_json::Value>) -> Vec<Message> {
    let total = raw.len();
    let messages: Vec<Message> = raw
        .into_iter()
        .filter_map(|value| match serde_json::from_value::<Message>(value) {
            Ok(msg) => Some(msg),
            Err(e) => {
                warn!(error = %e, "skipping malformed message entry");
                None
            }
        })
        .collect();
    if messages.len() < total {
        warn!(
            dropped = total - messages.len(),
            "poll response contained malformed entries"
        );
    }
    messages
}
