//! Error types and the error list shared by every view-model.
//!
//! # Design
//! The backend reports every failure the same way: a non-2xx status and a
//! body of the form `{"messages": [...]}`. Validation failures and server
//! errors are deliberately not told apart; `Request` carries the status for
//! logging but the UI only ever sees the message list.

use serde::Deserialize;

/// Errors produced while talking to the admin API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// No response arrived (connection refused, DNS, host-side failure).
    #[error("transport failed: {0}")]
    Transport(String),

    /// The server answered with a non-2xx status.
    #[error("request failed with HTTP {status}")]
    Request { status: u16, messages: Vec<String> },

    /// A 2xx body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(String),

    /// The request payload could not be serialized to JSON.
    #[error("serialization failed: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Build a `Request` error from a failed response, pulling `messages`
    /// out of the body when it has them.
    pub fn from_response(status: u16, body: &str) -> Self {
        ApiError::Request {
            status,
            messages: ErrorBody::parse(body).messages,
        }
    }

    /// The messages to show the user. Empty unless the server sent some.
    pub fn messages(&self) -> &[String] {
        match self {
            ApiError::Request { messages, .. } => messages,
            _ => &[],
        }
    }
}

/// Failure body returned by the admin API.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    #[serde(default)]
    pub messages: Vec<String>,
}

impl ErrorBody {
    /// Lenient parse: anything that is not a `messages` object yields an
    /// empty list.
    pub fn parse(body: &str) -> Self {
        serde_json::from_str(body).unwrap_or_default()
    }
}

/// Error list composed into each view-model.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorState {
    messages: Vec<String>,
}

impl ErrorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }

    pub fn set(&mut self, messages: Vec<String>) {
        self.messages = messages;
    }

    pub fn set_from(&mut self, error: &ApiError) {
        self.messages = error.messages().to_vec();
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    pub fn has_errors(&self) -> bool {
        !self.messages.is_empty()
    }
}
