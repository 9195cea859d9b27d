use common::media_urls::MediaUrls;
use common::Video;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

use crate::state::{CardEvent, CardState, PreviewState};
use crate::view::{render_card, CardView, RenderContext};

/// Receives the download action of a card
///
/// The card performs no I/O itself; it passes the full-resolution URL and
/// the video title, verbatim, to this handler.
pub trait DownloadHandler: Send + Sync {
    fn on_download(&self, url: &str, title: &str);
}

impl<F> DownloadHandler for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn on_download(&self, url: &str, title: &str) {
        self(url, title)
    }
}

/// A download the card handed to its handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRequest {
    pub url: String,
    pub title: String,
}

impl DownloadRequest {
    /// Filesystem-safe `{title}.mp4`
    ///
    /// Path separators, control characters and characters reserved on common
    /// filesystems become `_`; a blank title falls back to `video`.
    pub fn file_name(&self) -> String {
        let stem: String = self
            .title
            .trim()
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        let stem = stem.trim_matches('.');

        if stem.is_empty() {
            "video.mp4".to_string()
        } else {
            format!("{}.mp4", stem)
        }
    }
}

/// One gallery card: a video, its local presentation state and its download handler
pub struct VideoCard {
    video: Video,
    state: CardState,
    on_download: Arc<dyn DownloadHandler>,
}

impl fmt::Debug for VideoCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VideoCard")
            .field("video", &self.video)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

impl VideoCard {
    pub fn new(video: Video, on_download: Arc<dyn DownloadHandler>) -> Self {
        Self {
            video,
            state: CardState::new(),
            on_download,
        }
    }

    pub fn key(&self) -> &str {
        self.video.key()
    }

    pub fn video(&self) -> &Video {
        &self.video
    }

    pub fn state(&self) -> &CardState {
        &self.state
    }

    pub fn preview_state(&self) -> PreviewState {
        self.state.preview_state()
    }

    pub fn handle(&mut self, event: CardEvent) -> bool {
        let changed = self.state.apply(event);
        debug!(
            card_id = %self.key(),
            event = %event,
            changed,
            state = ?self.state.preview_state(),
            "card event handled"
        );
        changed
    }

    pub fn pointer_enter(&mut self) -> bool {
        self.handle(CardEvent::PointerEnter)
    }

    pub fn pointer_leave(&mut self) -> bool {
        self.handle(CardEvent::PointerLeave)
    }

    pub fn preview_error(&mut self) -> bool {
        self.handle(CardEvent::PreviewError)
    }

    pub fn thumbnail_error(&mut self) -> bool {
        self.handle(CardEvent::ThumbnailError)
    }

    pub fn urls(&self, ctx: &RenderContext) -> MediaUrls {
        ctx.media_urls(&self.video.public_id)
    }

    pub fn render(&self, ctx: &RenderContext) -> CardView {
        render_card(&self.video, &self.state, ctx)
    }

    /// Activate the download control
    ///
    /// Invokes the handler exactly once with the full-resolution URL and the
    /// title, and returns what was handed over.
    pub fn download(&self, ctx: &RenderContext) -> DownloadRequest {
        let request = DownloadRequest {
            url: self.urls(ctx).full_video,
            title: self.video.title.clone(),
        };

        info!(
            card_id = %self.key(),
            url = %request.url,
            "download requested"
        );
        self.on_download.on_download(&request.url, &request.title);
        request
    }
}
