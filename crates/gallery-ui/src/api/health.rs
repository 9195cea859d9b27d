use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde_json::{json, Value};

use crate::state::AppState;

pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let cards = state.card_store.read().await.len();
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": "gallery-ui",
            "version": common::VERSION,
            "cards": cards,
        })),
    )
}
