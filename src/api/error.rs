/// Error types for feed requests
use thiserror::Error;

/// Transport-class failures: the response could not be obtained or understood.
/// Business errors reported by the backend are not errors at this level; see
/// [`FeedResponse::Failure`](super::FeedResponse::Failure).
#[derive(Debug, Error)]
pub enum FetchError {
    /// Connection, TLS, timeout or body read failures
    #[error("Request failed: {0}")]
    Network(String),

    /// Body is not JSON or a record does not fit its schema
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Valid JSON that lacks a required envelope key
    #[error("Malformed response: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        FetchError::Network(e.to_string())
    }
}
