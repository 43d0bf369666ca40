//! Error types for the HipChat client.

use thiserror::Error;

/// Result type for HipChat client operations.
pub type Result<T> = std::result::Result<T, HipChatError>;

#[derive(Debug, Error)]
pub enum HipChatError {
    /// Transport failure (connection refused, timeout, TLS).
    /// The request URL is stripped since it carries credentials.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Non-2xx response from the API
    #[error("HipChat API error ({status}): {message}")]
    Api { status: u16, message: String },
}

impl From<reqwest::Error> for HipChatError {
    fn from(e: reqwest::Error) -> Self {
        HipChatError::Http(e.without_url())
    }
}
