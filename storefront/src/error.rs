//! Error types for the storefront crate.

use thiserror::Error;

/// Failure of a backend service call.
///
/// Sagas never let these escape: each one becomes a slice failure message via
/// [`ServiceError::message_or`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ServiceError {
    /// The backend answered with a non-success status
    #[error("API error {status}: {}", message.as_deref().unwrap_or("<no message>"))]
    Api {
        /// HTTP status code
        status: u16,
        /// `message` from the JSON error body, if any
        message: Option<String>,
    },

    /// The request never got a response
    #[error("transport error: {0}")]
    Transport(String),

    /// The HTTP client timed out
    #[error("request timed out")]
    Timeout,

    /// The response body did not match the expected model
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// A fixture-backed lookup found nothing
    #[error("not found: {0}")]
    NotFound(String),
}

impl ServiceError {
    /// Message shown in the slice: the backend's own message when it sent
    /// one, `fallback` otherwise.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            Self::Api {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else if error.is_decode() {
            Self::Decode(error.to_string())
        } else {
            Self::Transport(error.to_string())
        }
    }
}

/// Failure of the persisted session store.
#[derive(Error, Debug)]
pub enum SessionError {
    /// Reading or writing a session file failed
    #[error("session I/O failed: {0}")]
    Io(#[from] std::io::Error),

    /// A value could not be encoded
    #[error("session value could not be serialized: {0}")]
    Serialize(#[from] serde_json::Error),

    /// A stored value exists but does not decode
    #[error("stored session value `{key}` is corrupt")]
    Corrupt {
        /// Session key
        key: &'static str,
    },
}
