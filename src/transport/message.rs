use serde::{Deserialize, Serialize};

/// The opaque subscriber identifier handed out by the service.
///
/// Some deployments return it as a JSON string, others as a bare
/// number, so both shapes are accepted and normalized to text.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SubscriberId {
    Text(String),
    Number(i64),
}

impl SubscriberId {
    pub fn into_string(self) -> String {
        match self {
            SubscriberId::Text(s) => s,
            SubscriberId::Number(n) => n.to_string(),
        }
    }
}

impl std::fmt::Display for SubscriberId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubscriberId::Text(s) => f.write_str(s),
            SubscriberId::Number(n) => write!(f, "{n}"),
        }
    }
}

/// Request body for the subscribe and unsubscribe endpoints.
#[derive(Debug, Serialize)]
pub struct TopicRequest<'a> {
    pub topic: &'a str,
}
