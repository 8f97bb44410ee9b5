//! Error taxonomy for REST calls.
//!
//! ERROR HANDLING
//! ==============
//! Every network failure is converted into an `ApiError` at the call site
//! and rendered as a message; nothing here is fatal. A 401 is classified
//! separately so views can raise the shared auth-expired flag instead of
//! showing a generic message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure of a REST call, classified for display and recovery.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response.
    #[error("request failed: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server rejected the request (status {status})")]
    Rejected { status: u16, detail: Option<String> },

    /// The server answered 401 to an authorized call.
    #[error("authorization expired")]
    AuthExpired,

    /// The response body did not decode as the expected shape.
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success HTTP response. A `detail` string in the body
    /// is preserved for verbatim display.
    pub fn from_response(status: u16, body: Option<&serde_json::Value>) -> Self {
        if status == 401 {
            return Self::AuthExpired;
        }
        let detail = body
            .and_then(|value| value.get("detail"))
            .and_then(|detail| detail.as_str())
            .map(ToOwned::to_owned);
        Self::Rejected { status, detail }
    }

    /// Message shown to the user: the server's own `detail` verbatim when
    /// present, otherwise the caller's generic fallback.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_owned(),
        }
    }

    pub fn is_auth_expired(&self) -> bool {
        matches!(self, Self::AuthExpired)
    }
}
