//! Error types for the Biblion admin client

use thiserror::Error;

/// Failures a pipeline call can surface to its caller.
///
/// Exactly two kinds exist: the upstream understood the request and reported
/// a logical failure through the envelope, or the request never produced a
/// parseable envelope at all. No finer 4xx/5xx split is made.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Envelope decoded with `code != 200`; carries the envelope message.
    #[error("{message}")]
    Application { message: String },

    /// Request failed before a parseable envelope was obtained.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Causes counted as transport failures.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connect failure, timeout, or any other HTTP-level error.
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    /// Body that does not decode as the response envelope, or a payload
    /// that does not match the declared result type.
    #[error("malformed response envelope: {0}")]
    Envelope(#[from] serde_json::Error),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(TransportError::Http(err))
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Transport(TransportError::Envelope(err))
    }
}

/// Result type alias for client operations
pub type ApiResult<T> = Result<T, ApiError>;
