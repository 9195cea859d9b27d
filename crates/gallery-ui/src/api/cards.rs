use axum::extract::{Path, State};
use axum::response::Html;
use axum::Json;
use serde::Serialize;
use tracing::warn;
use video_card::{CardEvent, CardView};

use crate::error::ApiError;
use crate::page::render_gallery_page;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub url: String,
    pub title: String,
    pub file_name: String,
}

pub async fn gallery_page(State(state): State<AppState>) -> Html<String> {
    let store = state.card_store.read().await;
    let views: Vec<CardView> = store
        .list()
        .into_iter()
        .map(|card| card.render(&state.render))
        .collect();
    Html(render_gallery_page(&views))
}

pub async fn get_card(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let store = state.card_store.read().await;
    let card = store.get(&id)?;
    Ok(Html(card.render(&state.render).to_html()))
}

pub async fn get_card_view(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CardView>, ApiError> {
    let store = state.card_store.read().await;
    let card = store.get(&id)?;
    Ok(Json(card.render(&state.render)))
}

pub async fn pointer_enter(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    apply_event(&state, &id, CardEvent::PointerEnter).await
}

pub async fn pointer_leave(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    apply_event(&state, &id, CardEvent::PointerLeave).await
}

pub async fn preview_error(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    warn!(card_id = %id, "client reported preview load failure");
    apply_event(&state, &id, CardEvent::PreviewError).await
}

pub async fn thumbnail_error(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    warn!(card_id = %id, "client reported thumbnail load failure");
    apply_event(&state, &id, CardEvent::ThumbnailError).await
}

/// Apply an event and return the re-rendered card
async fn apply_event(state: &AppState, id: &str, event: CardEvent) -> Result<Html<String>, ApiError> {
    let mut store = state.card_store.write().await;
    store.dispatch(id, event)?;
    let card = store.get(id)?;
    Ok(Html(card.render(&state.render).to_html()))
}

pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DownloadResponse>, ApiError> {
    let store = state.card_store.read().await;
    let request = store.get(&id)?.download(&state.render);

    Ok(Json(DownloadResponse {
        file_name: request.file_name(),
        url: request.url,
        title: request.title,
    }))
}
