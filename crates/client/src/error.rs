//! Client error types.

use labdesk_core::area::AreaError;
use labdesk_core::FetchError;
use thiserror::Error;

/// Result type alias for client module.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl From<AreaError> for ClientError {
    fn from(err: AreaError) -> Self {
        ClientError::InvalidInput(err.to_string())
    }
}

/// Collapses a transport error into a [`FetchError`].
pub fn fetch_error(err: reqwest::Error) -> FetchError {
    if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Request(err.to_string())
    }
}
