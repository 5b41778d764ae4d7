//! Error types for the api-client crate.

use thiserror::Error;

/// Errors that can occur when talking to the recommendation service
#[derive(Error, Debug)]
pub enum ApiError {
    /// The configured base URL could not be parsed
    #[error("Invalid API URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The request never produced a response (DNS, connect, TLS, ...)
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The service answered with a non-2xx status
    ///
    /// `message` is taken from the `{"error": ...}` body when the service
    /// sends one, otherwise it is the status reason.
    #[error("Service returned {status}: {message}")]
    Status { status: u16, message: String },

    /// The body was not the JSON shape we expected
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ApiError {
    /// Short message suitable for showing to the user.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message, .. } => message.clone(),
            ApiError::Transport(_) => "Could not reach the recommendation service".to_string(),
            other => other.to_string(),
        }
    }
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, ApiError>;
