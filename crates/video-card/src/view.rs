//! Card layout as plain data
//!
//! [`render_card`] is a pure function of the video, its local state and the
//! injected collaborators. Hosts turn the resulting [`CardView`] into markup
//! (see [`crate::html`]) or ship it as JSON.

use common::format::{format_duration, format_percentage, format_size};
use common::media_urls::{MediaUrlBuilder, MediaUrls, CARD_MEDIA_HEIGHT, CARD_MEDIA_WIDTH};
use common::relative_time::RelativeTime;
use common::Video;
use serde::Serialize;
use std::sync::Arc;

use crate::state::{CardState, PreviewState};

pub const PREVIEW_UNAVAILABLE_TEXT: &str = "Preview not available";
pub const THUMBNAIL_UNAVAILABLE_TEXT: &str = "Thumbnail not available";

/// Lines shown before the title is truncated
pub const TITLE_LINE_CLAMP: u8 = 1;
/// Lines shown before the description is truncated
pub const DESCRIPTION_LINE_CLAMP: u8 = 2;

/// Collaborators a card needs to render
#[derive(Clone)]
pub struct RenderContext {
    pub urls: Arc<dyn MediaUrlBuilder>,
    pub relative_time: Arc<dyn RelativeTime>,
}

impl RenderContext {
    pub fn new(urls: Arc<dyn MediaUrlBuilder>, relative_time: Arc<dyn RelativeTime>) -> Self {
        Self {
            urls,
            relative_time,
        }
    }

    pub fn media_urls(&self, public_id: &str) -> MediaUrls {
        MediaUrls::derive(self.urls.as_ref(), public_id)
    }
}

/// Content of the card's media area
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MediaRegion {
    Thumbnail {
        url: String,
        alt: String,
        width: u32,
        height: u32,
    },
    ThumbnailUnavailable {
        message: String,
    },
    /// Muted clip that starts on its own and loops while mounted
    Preview {
        url: String,
        autoplay: bool,
        muted: bool,
        looping: bool,
    },
    PreviewUnavailable {
        message: String,
    },
}

impl MediaRegion {
    /// Serialized `kind` tag of the region
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Thumbnail { .. } => "thumbnail",
            Self::ThumbnailUnavailable { .. } => "thumbnail_unavailable",
            Self::Preview { .. } => "preview",
            Self::PreviewUnavailable { .. } => "preview_unavailable",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatBlock {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadControl {
    pub url: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView {
    pub card_id: String,
    pub state: PreviewState,
    pub media: MediaRegion,
    pub show_play_overlay: bool,
    pub duration: String,
    pub title: String,
    pub description: String,
    pub uploaded: String,
    pub original: StatBlock,
    pub compressed: StatBlock,
    pub compression: String,
    pub download: DownloadControl,
}

pub fn render_card(video: &Video, state: &CardState, ctx: &RenderContext) -> CardView {
    let urls = ctx.media_urls(&video.public_id);

    let media = match state.preview_state() {
        PreviewState::Idle if state.thumbnail_error() => MediaRegion::ThumbnailUnavailable {
            message: THUMBNAIL_UNAVAILABLE_TEXT.to_string(),
        },
        PreviewState::Idle => MediaRegion::Thumbnail {
            url: urls.thumbnail,
            alt: video.title.clone(),
            width: CARD_MEDIA_WIDTH,
            height: CARD_MEDIA_HEIGHT,
        },
        PreviewState::Previewing => MediaRegion::Preview {
            url: urls.preview,
            autoplay: true,
            muted: true,
            looping: true,
        },
        PreviewState::PreviewFailed => MediaRegion::PreviewUnavailable {
            message: PREVIEW_UNAVAILABLE_TEXT.to_string(),
        },
    };

    CardView {
        card_id: video.key().to_string(),
        state: state.preview_state(),
        media,
        show_play_overlay: state.is_hovered(),
        duration: format_duration(video.duration),
        title: video.title.clone(),
        description: video.description.clone(),
        uploaded: format!("Uploaded {}", ctx.relative_time.from_now(video.created_at)),
        original: StatBlock {
            label: "Original".to_string(),
            value: format_size(video.original_size),
        },
        compressed: StatBlock {
            label: "Compressed".to_string(),
            value: format_size(video.compressed_size),
        },
        compression: format_percentage(video.compression_percentage()),
        download: DownloadControl {
            url: urls.full_video,
            title: video.title.clone(),
        },
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::{context, video};
    use super::*;
    use crate::state::CardEvent;

    #[test]
    fn test_idle_card_shows_thumbnail() {
        let view = render_card(&video(), &CardState::new(), &context());

        assert_eq!(view.card_id, "abc123");
        assert_eq!(view.state, PreviewState::Idle);
        assert_eq!(
            view.media,
            MediaRegion::Thumbnail {
                url: "img://abc123/400x225".to_string(),
                alt: "My Clip".to_string(),
                width: 400,
                height: 225,
            }
        );
        assert!(!view.show_play_overlay);
    }

    #[test]
    fn test_metadata_fields() {
        let view = render_card(&video(), &CardState::new(), &context());

        assert_eq!(view.duration, "2:05");
        assert_eq!(view.title, "My Clip");
        assert_eq!(view.description, "A short clip");
        assert_eq!(view.uploaded, "Uploaded 3 hours ago");
        assert_eq!(view.original.label, "Original");
        assert_eq!(view.original.value, "1 kB");
        assert_eq!(view.compressed.label, "Compressed");
        assert_eq!(view.compressed.value, "250 B");
        assert_eq!(view.compression, "75%");
        assert_eq!(view.download.url, "vid://abc123/1920x1080");
        assert_eq!(view.download.title, "My Clip");
    }

    #[test]
    fn test_hovered_card_shows_preview() {
        let mut state = CardState::new();
        state.apply(CardEvent::PointerEnter);
        let view = render_card(&video(), &state, &context());

        assert!(view.show_play_overlay);
        assert_eq!(
            view.media,
            MediaRegion::Preview {
                url: "vid://abc123/400x225/e_preview:duration_15:max_seg_9:min_seg_dur_1"
                    .to_string(),
                autoplay: true,
                muted: true,
                looping: true,
            }
        );
    }

    #[test]
    fn test_failed_preview_shows_message() {
        let mut state = CardState::new();
        state.apply(CardEvent::PointerEnter);
        state.apply(CardEvent::PreviewError);
        let view = render_card(&video(), &state, &context());

        assert!(view.show_play_overlay);
        assert_eq!(
            view.media,
            MediaRegion::PreviewUnavailable {
                message: PREVIEW_UNAVAILABLE_TEXT.to_string()
            }
        );
    }

    #[test]
    fn test_thumbnail_failure_placeholder_only_when_idle() {
        let mut state = CardState::new();
        state.apply(CardEvent::ThumbnailError);
        let view = render_card(&video(), &state, &context());
        assert_eq!(
            view.media,
            MediaRegion::ThumbnailUnavailable {
                message: THUMBNAIL_UNAVAILABLE_TEXT.to_string()
            }
        );

        state.apply(CardEvent::PointerEnter);
        let view = render_card(&video(), &state, &context());
        assert!(matches!(view.media, MediaRegion::Preview { .. }));
    }

    #[test]
    fn test_zero_original_size_renders_dash() {
        let mut v = video();
        v.original_size = 0;
        let view = render_card(&v, &CardState::new(), &context());
        assert_eq!(view.compression, "—");
        assert_eq!(view.original.value, "0 B");
    }

    #[test]
    fn test_view_serializes_media_kind() {
        let view = render_card(&video(), &CardState::new(), &context());
        let value = serde_json::to_value(&view).unwrap();
        assert_eq!(value["media"]["kind"], "thumbnail");
        assert_eq!(value["state"], "idle");
    }
}
