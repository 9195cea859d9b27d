pub mod format;
pub mod media_urls;
pub mod relative_time;
pub mod validation;
pub mod video;

pub use media_urls::{CloudinaryUrlBuilder, MediaUrlBuilder, MediaUrls};
pub use relative_time::{Clock, HumanizedRelativeTime, RelativeTime, SystemClock};
pub use video::Video;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
