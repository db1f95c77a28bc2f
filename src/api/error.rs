//! Errors of the photo-search client.
//!
//! Every variant ends up as the same "fetch failed" outcome in the gallery;
//! the distinction only matters for logs.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    /// The configured base URL and search path do not form a URL.
    #[error("Invalid search endpoint '{url}'")]
    InvalidEndpoint { url: String },

    /// HTTP client could not be constructed.
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Request never produced a response (DNS, connect, TLS, reset).
    #[error("Connection failed: {0}")]
    Connection(#[source] reqwest::Error),

    /// Upstream answered with a non-success status.
    #[error("Upstream error: {status} - {message}")]
    Status { status: u16, message: String },

    /// Body was not the expected JSON document.
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    /// Short identifier used as a structured log field.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::InvalidEndpoint { .. } => "invalid_endpoint",
            FetchError::Client(_) => "client",
            FetchError::Connection(_) => "connection",
            FetchError::Status { .. } => "status",
            FetchError::Decode(_) => "decode",
        }
    }
}
