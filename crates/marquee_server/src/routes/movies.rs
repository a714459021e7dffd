//! Movie entity endpoints.

use crate::AppState;
use crate::error::ApiResult;
use axum::{
    Json,
    extract::{Path, State},
    response::sse::{Event, KeepAlive, Sse},
};
use marquee_core::{FieldName, FieldUpdate, MovieState};
use serde::Deserialize;
use tokio_stream::{Stream, StreamExt, wrappers::BroadcastStream};
use tracing::instrument;

#[derive(Debug, Deserialize)]
pub(crate) struct RegenerateBody {
    title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct FieldBody {
    field: FieldName,
}

pub(crate) async fn get_movie(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Json<MovieState>> {
    let movie = state.registry().open(&slug).await?;
    Ok(Json(movie.state().await?))
}

#[instrument(skip(state, body))]
pub(crate) async fn regenerate(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<RegenerateBody>,
) -> ApiResult<Json<MovieState>> {
    let movie = state.registry().open(&slug).await?;
    Ok(Json(movie.regenerate(body.title).await?))
}

pub(crate) async fn lock(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<FieldBody>,
) -> ApiResult<Json<MovieState>> {
    let movie = state.registry().open(&slug).await?;
    Ok(Json(movie.lock(body.field).await?))
}

pub(crate) async fn unlock(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(body): Json<FieldBody>,
) -> ApiResult<Json<MovieState>> {
    let movie = state.registry().open(&slug).await?;
    Ok(Json(movie.unlock(body.field).await?))
}

pub(crate) async fn update_field(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(update): Json<FieldUpdate>,
) -> ApiResult<Json<MovieState>> {
    let movie = state.registry().open(&slug).await?;
    Ok(Json(movie.update(update).await?))
}

/// Server-sent events, one per committed state. Lagging clients skip states.
pub(crate) async fn events(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> ApiResult<Sse<impl Stream<Item = Result<Event, axum::Error>>>> {
    let movie = state.registry().open(&slug).await?;
    let stream = BroadcastStream::new(movie.subscribe())
        .filter_map(|message| message.ok())
        .map(|movie_state| Event::default().event("state").json_data(movie_state));
    Ok(Sse::new(stream).keep_alive(KeepAlive::default()))
}
