//! Mapping domain errors onto HTTP responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use marquee_error::{MarqueeError, MarqueeErrorKind, StorageErrorKind};
use serde_json::json;

/// Handler error: any domain error, rendered as a JSON body.
#[derive(Debug)]
pub struct ApiError(MarqueeError);

impl<T: Into<MarqueeError>> From<T> for ApiError {
    fn from(err: T) -> Self {
        Self(err.into())
    }
}

impl ApiError {
    /// Status and stable error code for this error.
    pub fn classify(&self) -> (StatusCode, &'static str) {
        match self.0.kind() {
            MarqueeErrorKind::Generation(_) => (StatusCode::BAD_GATEWAY, "GENERATION_FAILED"),
            MarqueeErrorKind::Entity(_) => (StatusCode::SERVICE_UNAVAILABLE, "ENTITY_UNAVAILABLE"),
            MarqueeErrorKind::Storage(e) => match e.kind {
                StorageErrorKind::NotFound(_) => (StatusCode::NOT_FOUND, "NOT_FOUND"),
                StorageErrorKind::InvalidKey(_) => (StatusCode::BAD_REQUEST, "INVALID_KEY"),
                _ => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
            },
            MarqueeErrorKind::Json(_) => (StatusCode::BAD_REQUEST, "BAD_REQUEST"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = self.classify();
        if status.is_server_error() {
            tracing::error!(error = %self.0, code, "Request failed");
        } else {
            tracing::debug!(error = %self.0, code, "Request rejected");
        }

        let body = json!({
            "error": self.0.kind().to_string(),
            "code": code,
        });
        (status, axum::Json(body)).into_response()
    }
}

/// Convenience type alias for handler return values.
pub(crate) type ApiResult<T> = Result<T, ApiError>;
