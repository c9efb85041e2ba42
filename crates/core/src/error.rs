use thiserror::Error;

/// Errors raised when an underlying fetch fails.
///
/// Every variant is the same failure as far as the caches are concerned:
/// the fetch did not produce a value. The variants only keep enough detail
/// for the caller to render a useful message. The type is `Clone` because a
/// single failed fetch is delivered to every caller that joined it.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Server returned {status}: {message}")]
    Status { status: u16, message: String },
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },
    #[error("Invalid response: {0}")]
    Decode(String),
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        FetchError::Decode(err.to_string())
    }
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;
