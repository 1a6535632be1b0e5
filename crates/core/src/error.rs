//! Client error model.

use thiserror::Error;

/// Result type used across the client layer.
pub type ClientResult<T> = Result<T, ClientError>;

/// A pre-submit check rejected the input; no network call was made.
///
/// Carries the offending field so screens can attach the message to the
/// right input instead of a page-level banner.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{field}: {message}")]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Client-side error.
///
/// Exactly one of these is surfaced per failed operation; callers decide how
/// to present it. Nothing here retries.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The server rejected the request (non-2xx). The message is the
    /// server-supplied `error` field when present.
    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never reached the server, or no response came back.
    #[error("transport error: {0}")]
    Transport(String),

    /// A success response carried a body that could not be decoded.
    #[error("decode error: {0}")]
    Decode(String),

    /// Input was rejected before any request was made.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl ClientError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// True when the server answered 401 (credential missing/expired).
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Api { status: 401, .. })
    }
}
