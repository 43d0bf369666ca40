//! Error types for the Trello client.

use thiserror::Error;

/// Result type for Trello client operations.
pub type Result<T> = std::result::Result<T, TrelloError>;

#[derive(Debug, Error)]
pub enum TrelloError {
    /// Transport failure (connection refused, timeout, TLS).
    /// The request URL is stripped since it carries credentials.
    #[error("HTTP error: {0}")]
    Http(reqwest::Error),

    /// Request body could not be serialized
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<reqwest::Error> for TrelloError {
    fn from(e: reqwest::Error) -> Self {
        TrelloError::Http(e.without_url())
    }
}
