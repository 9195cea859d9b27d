pub mod cards;
pub mod health;
pub mod videos;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the gallery router
pub fn router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/healthz", get(health::health_check))
        // Video records
        .route("/api/videos", get(videos::list_videos).post(videos::create_video))
        .route("/api/videos/:id", get(videos::get_video))
        .route("/api/downloads", get(videos::list_downloads))
        // Rendered cards
        .route("/", get(cards::gallery_page))
        .route("/gallery", get(cards::gallery_page))
        .route("/cards/:id", get(cards::get_card))
        .route("/cards/:id/view", get(cards::get_card_view))
        .route("/cards/:id/download", post(cards::download))
        .route("/cards/:id/pointer-enter", post(cards::pointer_enter))
        .route("/cards/:id/pointer-leave", post(cards::pointer_leave))
        .route("/cards/:id/preview-error", post(cards::preview_error))
        .route("/cards/:id/thumbnail-error", post(cards::thumbnail_error))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
