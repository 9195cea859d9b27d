use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use common::Video;
use tracing::info;

use crate::downloads::DownloadRecord;
use crate::error::ApiError;
use crate::state::AppState;

pub async fn list_videos(State(state): State<AppState>) -> Json<Vec<Video>> {
    let store = state.card_store.read().await;
    let videos = store.list().into_iter().map(|card| card.video().clone()).collect();
    Json(videos)
}

pub async fn get_video(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Video>, ApiError> {
    let store = state.card_store.read().await;
    let card = store.get(&id)?;
    Ok(Json(card.video().clone()))
}

pub async fn create_video(
    State(state): State<AppState>,
    Json(video): Json<Video>,
) -> Result<(StatusCode, Json<Video>), ApiError> {
    let mut store = state.card_store.write().await;
    let card = store.insert(video)?;
    info!(card_id = %card.key(), "video registered");
    Ok((StatusCode::CREATED, Json(card.video().clone())))
}

pub async fn list_downloads(State(state): State<AppState>) -> Json<Vec<DownloadRecord>> {
    Json(state.downloads.records())
}
