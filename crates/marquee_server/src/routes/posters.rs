//! Poster image pass-through.

use crate::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use marquee_storage::validate_key;
use tracing::{debug, error};

const JPEG: &str = "image/jpeg";

pub(crate) async fn get_poster(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Response {
    if !key.ends_with(".jpg") || validate_key(&key).is_err() {
        return StatusCode::NOT_FOUND.into_response();
    }

    match state.posters().get(&key).await {
        Ok(Some(bytes)) => ([(header::CONTENT_TYPE, JPEG)], Body::from(bytes)).into_response(),
        Ok(None) => {
            debug!(key = %key, "Poster not found");
            StatusCode::NOT_FOUND.into_response()
        }
        Err(e) => {
            error!(key = %key, error = %e, "Failed to read poster");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
