use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by a region request.
///
/// These mirror what the transport produced. Nothing here is retried or
/// reinterpreted, so a service-side `INVALID_ARGUMENT` arrives as
/// [`Error::Status`] with the service's error body intact.
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Region Lookup API returned error status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to parse Region Lookup JSON response: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("Failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl Error {
    /// HTTP status of the failed response, when the service answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Http(e) => e.status(),
            _ => None,
        }
    }
}
