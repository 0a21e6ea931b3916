//! Error types for the HTTP server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Server error type.
#[derive(Debug, thiserror::Error)]
pub(crate) enum ServerError {
    /// Request body is not a valid conversion request.
    #[error("{0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidJson(_) => StatusCode::BAD_REQUEST,
        };
        tracing::debug!(status = %status, error = %self, "Rejected request");
        (status, self.to_string()).into_response()
    }
}
