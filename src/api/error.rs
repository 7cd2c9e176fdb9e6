//! API error types.

use thiserror::Error;

/// Errors that can occur when talking to the backend API.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never produced a response (network failure, CORS, abort).
    #[error("Request failed: {0}")]
    Network(String),

    /// The backend answered 404 for the requested resource.
    #[error("Not found")]
    NotFound,

    /// The backend answered with a non-success status.
    #[error("HTTP {status}: {message}")]
    Backend { status: u16, message: String },

    /// The response body could not be decoded as the expected JSON shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl ApiError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, ApiError::NotFound)
    }

    /// Message suitable for inline display in a view.
    pub fn display_message(&self) -> String {
        match self {
            ApiError::Network(_) => "The server is not responding. Try again later.".to_owned(),
            ApiError::NotFound => "Not found.".to_owned(),
            ApiError::Backend { message, .. } => message.clone(),
            ApiError::Decode(_) => "The server returned an unexpected response.".to_owned(),
        }
    }
}

/// Pull a human-readable message out of a backend error payload.
///
/// The backend reports errors as either `{"error": "..."}` (parse trigger)
/// or `{"detail": "..."}` (DRF views).
pub(crate) fn extract_error_message(body: &serde_json::Value) -> Option<String> {
    body.get("error")
        .or_else(|| body.get("detail"))
        .and_then(|v| v.as_str())
        .map(str::to_owned)
}
