//! Error types for the registration endpoint

use thiserror::Error;

/// Shown when the request could not be completed at all
pub const GENERIC_FAILURE: &str = "Something went wrong. Please try again.";

/// Shown when the server refused the registration without saying why
pub const FALLBACK_FAILURE: &str = "Failed to submit. Please try again.";

/// Errors that can occur while submitting a registration
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response (connection refused, DNS, ...)
    #[error("transport error: {0}")]
    Transport(String),

    /// The server answered with a body that is not JSON
    #[error("invalid response body: {0}")]
    InvalidResponse(String),

    /// The server answered with a non-success status
    #[error("registration rejected with status {status}")]
    Rejected {
        status: u16,
        /// The `error` field of the response body, when present
        message: Option<String>,
    },

    /// The request task ended without reporting a result
    #[error("submission interrupted")]
    Interrupted,
}

impl SubmitError {
    /// Returns the message to show in the alert dialog
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected {
                message: Some(message),
                ..
            } if !message.is_empty() => message.clone(),
            Self::Rejected { .. } => FALLBACK_FAILURE.to_string(),
            Self::Transport(_) | Self::InvalidResponse(_) | Self::Interrupted => {
                GENERIC_FAILURE.to_string()
            }
        }
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for SubmitError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidResponse(err.to_string())
    }
}
