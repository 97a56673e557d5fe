//! Resource client error types

use thiserror::Error;

/// Failure of a single call to the `/lugares` resource
#[derive(Error, Debug)]
pub enum ClientError {
    /// Connection refused or host unreachable
    #[error("Backend unavailable at {0}")]
    Unavailable(String),

    #[error("Request timeout")]
    Timeout,

    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The backend answered with a non-2xx status
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// The body could not be read as a place
    #[error("Invalid response body: {0}")]
    Decode(String),
}

impl ClientError {
    /// Map a reqwest send error the same way for every call
    pub(crate) fn from_send(err: reqwest::Error, url: &str) -> Self {
        if err.is_timeout() {
            ClientError::Timeout
        } else if err.is_connect() {
            ClientError::Unavailable(url.to_string())
        } else {
            ClientError::Request(err)
        }
    }

    /// HTTP status, when the backend answered at all
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Api { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

/// Result type for resource client calls
pub type ClientResult<T> = Result<T, ClientError>;
