//! Wire types for the chat REST API.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Server-assigned message identifier. The API is loose about the concrete
/// form, so both integer and string identifiers are accepted.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    Int(i64),
    Text(String),
}

/// Creation time as reported by the server: unix seconds or a date string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Timestamp {
    Seconds(f64),
    Text(String),
}

/// A single chat message. Immutable once received; the client keeps server
/// order and never re-sorts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<MessageId>,
    pub username: String,
    pub text: String,
    pub created_at: Timestamp,
}

/// Result of a successful login or register call.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub username: String,
}

/// Profile of the authenticated member.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub username: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Decode a feed response body. Anything that is not a JSON array counts as
/// an empty feed; elements that fail to decode are skipped.
pub fn messages_from_value(value: serde_json::Value) -> Vec<Message> {
    match value {
        serde_json::Value::Array(items) => items
            .into_iter()
            .filter_map(|item| serde_json::from_value(item).ok())
            .collect(),
        _ => Vec::new(),
    }
}
