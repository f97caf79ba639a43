use std::error::Error as _;

use thiserror::Error;

/// Placeholder used when the chat service reports a failure without saying why.
pub const UNKNOWN_UPSTREAM_ERROR: &str = "Unknown error";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelayError {
    /// The chat service could not be reached: DNS, connect, or timeout.
    #[error("URLError: {0}")]
    Transport(String),

    /// The chat service answered with a non-2xx status.
    #[error("HTTPError {code}: {reason}")]
    UpstreamHttp { code: u16, reason: String },

    /// The chat service answered 2xx but reported `success: false`.
    #[error("Chat service error: {0}")]
    UpstreamLogical(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("{0}")]
    Unexpected(String),
}

impl RelayError {
    /// HTTP status code carried by the failure envelope for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            RelayError::Transport(_) => 504,
            RelayError::UpstreamHttp { .. } => 502,
            RelayError::UpstreamLogical(_)
            | RelayError::MalformedRequest(_)
            | RelayError::Unexpected(_) => 500,
        }
    }

    /// Builds an `UpstreamLogical` error, substituting the placeholder for a
    /// missing or blank upstream message.
    #[must_use]
    pub fn upstream_logical(error: Option<&str>) -> Self {
        let text = error
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(UNKNOWN_UPSTREAM_ERROR);
        RelayError::UpstreamLogical(text.to_string())
    }

    /// Builds an `UpstreamHttp` error from a status code, using its canonical
    /// reason phrase.
    #[must_use]
    pub fn upstream_http(status: reqwest::StatusCode) -> Self {
        RelayError::UpstreamHttp {
            code: status.as_u16(),
            reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
        }
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return RelayError::upstream_http(status);
        }
        if error.is_timeout() {
            return RelayError::Transport("timed out".to_string());
        }
        if error.is_decode() {
            return RelayError::Unexpected(format!("Invalid chat service response: {error}"));
        }
        if error.is_builder() {
            return RelayError::Unexpected(format!("Failed to build chat service request: {error}"));
        }
        if error.is_connect() || error.is_request() || error.is_redirect() {
            return RelayError::Transport(innermost_reason(&error));
        }
        RelayError::Unexpected(error.to_string())
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(error: serde_json::Error) -> Self {
        RelayError::Unexpected(error.to_string())
    }
}

// reqwest's own Display only says "error sending request for url (...)";
// the useful part ("Connection refused", "dns error") sits at the bottom of the chain.
fn innermost_reason(error: &reqwest::Error) -> String {
    let mut reason = error.to_string();
    let mut source = error.source();
    while let Some(inner) = source {
        reason = inner.to_string();
        source = inner.source();
    }
    reason
}
