//! Failure taxonomy for REST calls.
//!
//! Every variant renders to a sentence fit for inline display; fetch cells
//! store that string, never the error value.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

pub const NO_TOKEN_MESSAGE: &str = "No authentication token found";
pub const GENERIC_FAILURE_MESSAGE: &str = "Request failed";

/// Error returned by the request layer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No token in the session; the request was never sent.
    #[error("No authentication token found")]
    Unauthenticated,
    /// Non-2xx response. `message` is the body's `message` or the call site's fallback.
    #[error("{message}")]
    Server { status: u16, message: String },
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Transport(String),
    /// 2xx response whose body did not match the expected shape.
    #[error("Unexpected response from server: {0}")]
    Malformed(String),
}

impl FetchError {
    /// User-facing text, never empty.
    pub fn user_message(&self) -> String {
        let text = self.to_string();
        if text.trim().is_empty() {
            GENERIC_FAILURE_MESSAGE.to_owned()
        } else {
            text
        }
    }

    /// HTTP status when the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }
}
