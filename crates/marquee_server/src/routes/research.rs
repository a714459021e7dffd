//! Research endpoints.

use crate::AppState;
use crate::error::ApiResult;
use axum::{Json, extract::State};
use marquee_core::ResearchState;
use tracing::instrument;

pub(crate) async fn get_research(State(state): State<AppState>) -> Json<ResearchState> {
    Json(state.research().snapshot())
}

#[instrument(skip(state))]
pub(crate) async fn gather(State(state): State<AppState>) -> ApiResult<Json<ResearchState>> {
    Ok(Json(state.research().gather_trends().await?))
}
