//! Gallery card for a compressed video
//!
//! A [`VideoCard`] shows a video's thumbnail, swaps in a looping preview clip
//! while the pointer is over it, and hands the full-resolution URL to a
//! caller-supplied [`DownloadHandler`] when its download control is activated.

pub mod card;
pub mod catalog;
pub mod error;
pub mod html;
pub mod state;
pub mod view;

pub use card::{DownloadHandler, DownloadRequest, VideoCard};
pub use error::CardError;
pub use state::{CardEvent, CardState, PreviewState};
pub use view::{render_card, CardView, MediaRegion, RenderContext};
