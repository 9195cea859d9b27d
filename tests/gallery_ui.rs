/// Integration tests for the gallery host
use chrono::{Duration, TimeZone, Utc};
use common::relative_time::FixedClock;
use common::{CloudinaryUrlBuilder, HumanizedRelativeTime, Video};
use gallery_ui::{api, AppState, Config};
use serde_json::{json, Value};
use std::sync::Arc;
use video_card::RenderContext;

const FULL_URL: &str =
    "https://res.cloudinary.com/demo/video/upload/c_limit,w_1920,h_1080/f_auto/q_auto/abc123";

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).single().unwrap()
}

fn video(public_id: &str, title: &str, hours_ago: i64) -> Video {
    Video {
        id: None,
        public_id: public_id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        created_at: now() - Duration::hours(hours_ago),
        duration: 125.0,
        original_size: 1000,
        compressed_size: 250,
    }
}

/// Helper function to create a test gallery with two cards
fn setup_test_gallery() -> (axum_test::TestServer, AppState) {
    let render = RenderContext::new(
        Arc::new(CloudinaryUrlBuilder::new("demo")),
        Arc::new(HumanizedRelativeTime::with_clock(FixedClock(now()))),
    );
    let videos = vec![
        video("abc123", "My Clip", 3),
        video("def456", "Older Clip", 48),
    ];
    let state = AppState::with_context(Config::default(), render, videos).unwrap();
    let server = axum_test::TestServer::new(api::router(state.clone())).unwrap();
    (server, state)
}

#[tokio::test]
async fn test_health_endpoint() {
    let (server, _state) = setup_test_gallery();

    let response = server.get("/healthz").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["service"], "gallery-ui");
    assert_eq!(body["cards"], 2);
}

#[tokio::test]
async fn test_list_videos_newest_first() {
    let (server, _state) = setup_test_gallery();

    let response = server.get("/api/videos").await;
    assert_eq!(response.status_code(), 200);

    let videos: Vec<Video> = response.json();
    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].public_id, "abc123");
    assert_eq!(videos[1].public_id, "def456");
}

#[tokio::test]
async fn test_get_video_not_found() {
    let (server, _state) = setup_test_gallery();

    let response = server.get("/api/videos/nonexistent").await;
    assert_eq!(response.status_code(), 404);

    let body: Value = response.json();
    assert!(body["error"].as_str().unwrap().contains("nonexistent"));
}

#[tokio::test]
async fn test_create_video_accepts_string_sizes() {
    let (server, _state) = setup_test_gallery();

    let response = server
        .post("/api/videos")
        .json(&json!({
            "publicId": "ghi789",
            "title": "Fresh upload",
            "description": "",
            "createdAt": "2024-06-01T11:00:00Z",
            "duration": 61.2,
            "originalSize": "5000000",
            "compressedSize": "1250000"
        }))
        .await;
    assert_eq!(response.status_code(), 201);

    let created: Video = response.json();
    assert_eq!(created.original_size, 5_000_000);

    let response = server.get("/api/videos/ghi789").await;
    assert_eq!(response.status_code(), 200);
}

#[tokio::test]
async fn test_create_video_conflict_and_invalid() {
    let (server, _state) = setup_test_gallery();

    let duplicate = json!({
        "publicId": "abc123",
        "title": "Again",
        "createdAt": "2024-06-01T11:00:00Z",
        "duration": 1,
        "originalSize": 1,
        "compressedSize": 1
    });
    let response = server.post("/api/videos").json(&duplicate).await;
    assert_eq!(response.status_code(), 409);

    let invalid = json!({
        "publicId": "../escape",
        "title": "Bad",
        "createdAt": "2024-06-01T11:00:00Z",
        "duration": 1,
        "originalSize": 1,
        "compressedSize": 1
    });
    let response = server.post("/api/videos").json(&invalid).await;
    assert_eq!(response.status_code(), 400);
}

#[tokio::test]
async fn test_card_fragment_idle() {
    let (server, _state) = setup_test_gallery();

    let response = server.get("/cards/abc123").await;
    assert_eq!(response.status_code(), 200);

    let html = response.text();
    assert!(html.contains(r#"data-card-state="idle""#));
    assert!(html.contains(
        "https://res.cloudinary.com/demo/video/upload/c_fill,w_400,h_225,g_auto/f_jpg/q_auto/abc123.jpg"
    ));
    assert!(html.contains("2:05"));
    assert!(html.contains("Uploaded 3 hours ago"));
    assert!(html.contains("1 kB"));
    assert!(html.contains("250 B"));
    assert!(html.contains("75%"));
}

#[tokio::test]
async fn test_hover_cycle_over_http() {
    let (server, _state) = setup_test_gallery();

    let html = server.post("/cards/abc123/pointer-enter").await.text();
    assert!(html.contains(r#"data-card-state="previewing""#));
    assert!(html.contains("e_preview:duration_15:max_seg_9:min_seg_dur_1"));

    let html = server.post("/cards/abc123/preview-error").await.text();
    assert!(html.contains("Preview not available"));

    let html = server.post("/cards/abc123/pointer-leave").await.text();
    assert!(html.contains(r#"data-card-state="idle""#));

    let html = server.post("/cards/abc123/pointer-enter").await.text();
    assert!(html.contains(r#"data-card-state="previewing""#));

    // The other card is untouched
    let html = server.get("/cards/def456").await.text();
    assert!(html.contains(r#"data-card-state="idle""#));
}

#[tokio::test]
async fn test_repeated_enter_returns_unchanged_markers() {
    let (server, _state) = setup_test_gallery();

    let first = server.post("/cards/abc123/pointer-enter").await.text();
    let again = server.post("/cards/abc123/pointer-enter").await.text();
    assert_eq!(first, again);
    assert!(again.contains(r#"data-card-state="previewing""#));
    assert!(again.contains(r#"data-card-media="preview""#));

    let page = server.get("/gallery").await.text();
    assert!(page.contains("sameView(current, next)"));
}

#[tokio::test]
async fn test_stale_preview_error_is_ignored() {
    let (server, _state) = setup_test_gallery();

    let response = server.post("/cards/abc123/preview-error").await;
    assert_eq!(response.status_code(), 200);
    assert!(response.text().contains(r#"data-card-state="idle""#));
}

#[tokio::test]
async fn test_thumbnail_error_shows_placeholder() {
    let (server, _state) = setup_test_gallery();

    let html = server.post("/cards/def456/thumbnail-error").await.text();
    assert!(html.contains("Thumbnail not available"));
    assert!(html.contains(r#"data-card-media="thumbnail_unavailable""#));
    assert!(!html.contains("<img"));
}

#[tokio::test]
async fn test_download_hands_over_full_video_url() {
    let (server, state) = setup_test_gallery();

    let response = server.post("/cards/abc123/download").await;
    assert_eq!(response.status_code(), 200);

    let body: Value = response.json();
    assert_eq!(body["url"], FULL_URL);
    assert_eq!(body["title"], "My Clip");
    assert_eq!(body["file_name"], "My Clip.mp4");

    let records = state.downloads.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].url, FULL_URL);
    assert_eq!(records[0].title, "My Clip");

    let listed: Vec<Value> = server.get("/api/downloads").await.json();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn test_event_on_unknown_card() {
    let (server, state) = setup_test_gallery();

    assert_eq!(server.post("/cards/missing/pointer-enter").await.status_code(), 404);
    assert_eq!(server.post("/cards/missing/download").await.status_code(), 404);
    assert!(state.downloads.is_empty());
}

#[tokio::test]
async fn test_card_view_json() {
    let (server, _state) = setup_test_gallery();

    let view: Value = server.get("/cards/def456/view").await.json();
    assert_eq!(view["card_id"], "def456");
    assert_eq!(view["media"]["kind"], "thumbnail");
    assert_eq!(view["uploaded"], "Uploaded 2 days ago");
    assert_eq!(view["compression"], "75%");
}

#[tokio::test]
async fn test_gallery_page_lists_cards() {
    let (server, _state) = setup_test_gallery();

    let response = server.get("/gallery").await;
    assert_eq!(response.status_code(), 200);

    let html = response.text();
    assert!(html.starts_with("<!DOCTYPE html>"));
    let first = html.find(r#"data-card-id="abc123""#).unwrap();
    let second = html.find(r#"data-card-id="def456""#).unwrap();
    assert!(first < second);
}
