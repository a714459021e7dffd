//! Router assembly.

mod movies;
mod posters;
mod research;

use crate::AppState;
use axum::{
    Json, Router,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tower_http::trace::TraceLayer;

/// Creates the API router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .route("/images/posters/*key", get(posters::get_poster))
        .route("/movies/:slug", get(movies::get_movie).put(movies::update_field))
        .route("/movies/:slug/regenerate", post(movies::regenerate))
        .route("/movies/:slug/lock", post(movies::lock))
        .route("/movies/:slug/unlock", post(movies::unlock))
        .route("/movies/:slug/events", get(movies::events))
        .route("/research", get(research::get_research))
        .route("/research/gather", post(research::gather))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({"status": "ok"})))
}
