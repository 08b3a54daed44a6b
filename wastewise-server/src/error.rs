//! Mapping of service failures onto HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use wastewise_core::{ports::PortError, validate::ValidationError};

/// Body text returned for every internal failure. The cause is only logged.
pub const INTERNAL_MESSAGE: &str = "Internal server error";

#[derive(Debug, thiserror::Error)]
/// Errors a handler can end with.
pub enum ApiError {
    /// Payload failed required-field validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Body could not be read as JSON at all.
    #[error("Malformed request: {0}")]
    Malformed(String),
    /// A backend failed while processing a valid request.
    #[error(transparent)]
    Internal(#[from] PortError),
}

impl ApiError {
    /// HTTP status for this error.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Malformed(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Self::Internal(err) => {
                tracing::error!(error = %err, "request failed");
                INTERNAL_MESSAGE.to_owned()
            }
            Self::Validation(_) | Self::Malformed(_) => {
                tracing::debug!(error = %self, "request rejected");
                self.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
