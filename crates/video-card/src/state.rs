//! Local hover and media-error state of a single card

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{debug, warn};

use crate::error::CardError;

/// What the media region is currently doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PreviewState {
    /// Pointer outside the card, thumbnail shown
    Idle,
    /// Pointer over the card, preview clip attempted
    Previewing,
    /// Pointer over the card, preview clip failed to load
    PreviewFailed,
}

/// Events a card reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CardEvent {
    PointerEnter,
    PointerLeave,
    /// The preview clip element reported a load error
    PreviewError,
    /// The thumbnail image reported a load error
    ThumbnailError,
}

impl CardEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            CardEvent::PointerEnter => "pointer-enter",
            CardEvent::PointerLeave => "pointer-leave",
            CardEvent::PreviewError => "preview-error",
            CardEvent::ThumbnailError => "thumbnail-error",
        }
    }
}

impl fmt::Display for CardEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CardEvent {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pointer-enter" => Ok(CardEvent::PointerEnter),
            "pointer-leave" => Ok(CardEvent::PointerLeave),
            "preview-error" => Ok(CardEvent::PreviewError),
            "thumbnail-error" => Ok(CardEvent::ThumbnailError),
            other => Err(CardError::UnknownEvent(other.to_string())),
        }
    }
}

/// Presentation flags owned by one card
///
/// `preview_error` only has meaning while hovered and is cleared on every
/// hover toggle, so a failed preview never carries into the next hover
/// session. `thumbnail_error` is sticky: the thumbnail URL never changes, so
/// retrying it would fail again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardState {
    is_hovered: bool,
    preview_error: bool,
    thumbnail_error: bool,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    pub fn preview_error(&self) -> bool {
        self.preview_error
    }

    pub fn thumbnail_error(&self) -> bool {
        self.thumbnail_error
    }

    pub fn preview_state(&self) -> PreviewState {
        match (self.is_hovered, self.preview_error) {
            (false, _) => PreviewState::Idle,
            (true, false) => PreviewState::Previewing,
            (true, true) => PreviewState::PreviewFailed,
        }
    }

    /// Apply an event, returning whether anything visible changed
    pub fn apply(&mut self, event: CardEvent) -> bool {
        let before = *self;

        match event {
            CardEvent::PointerEnter => {
                if !self.is_hovered {
                    self.is_hovered = true;
                    self.preview_error = false;
                }
            }
            CardEvent::PointerLeave => {
                self.is_hovered = false;
                self.preview_error = false;
            }
            CardEvent::PreviewError => {
                if self.preview_state() == PreviewState::Previewing {
                    self.preview_error = true;
                } else {
                    debug!(
                        state = ?self.preview_state(),
                        "ignoring preview error outside an active preview"
                    );
                }
            }
            CardEvent::ThumbnailError => {
                if !self.thumbnail_error {
                    warn!("thumbnail failed to load, showing placeholder");
                }
                self.thumbnail_error = true;
            }
        }

        let changed = before != *self;
        if changed {
            debug!(
                event = %event,
                from = ?before.preview_state(),
                to = ?self.preview_state(),
                "card state transition"
            );
        }
        changed
    }
}
