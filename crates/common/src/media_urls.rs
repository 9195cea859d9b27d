//! Delivery URL construction for stored video assets
//!
//! A card never talks to the media backend directly. It derives three URLs
//! from the asset's public id (a still thumbnail, a short muted preview clip
//! and the full-resolution video) through a [`MediaUrlBuilder`]. Builders are
//! pure: the same input always yields the same URL.

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Thumbnail and preview dimensions
pub const CARD_MEDIA_WIDTH: u32 = 400;
pub const CARD_MEDIA_HEIGHT: u32 = 225;

/// Full-resolution download dimensions
pub const FULL_VIDEO_WIDTH: u32 = 1920;
pub const FULL_VIDEO_HEIGHT: u32 = 1080;

/// Server-side preview effect: 15s summary built from at most 9 segments of at least 1s
pub const PREVIEW_EFFECT: &str = "e_preview:duration_15:max_seg_9:min_seg_dur_1";

pub const DEFAULT_MEDIA_BASE_URL: &str = "https://res.cloudinary.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Fill,
    Fit,
    Limit,
}

impl fmt::Display for Crop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self {
            Crop::Fill => "fill",
            Crop::Fit => "fit",
            Crop::Limit => "limit",
        };
        f.write_str(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gravity {
    Auto,
    Center,
}

impl fmt::Display for Gravity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Gravity::Auto => f.write_str("auto"),
            Gravity::Center => f.write_str("center"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    Jpg,
    Png,
}

impl ImageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpg => "jpg",
            ImageFormat::Png => "png",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Quality {
    Auto,
    Fixed(u8),
}

impl fmt::Display for Quality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quality::Auto => f.write_str("auto"),
            Quality::Fixed(value) => write!(f, "{}", value),
        }
    }
}

/// Resource type the asset is stored as on the media backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Image,
    Video,
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetType::Image => f.write_str("image"),
            AssetType::Video => f.write_str("video"),
        }
    }
}

/// Parameters for a still image derived from an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageTransform {
    pub width: u32,
    pub height: u32,
    pub crop: Crop,
    pub gravity: Gravity,
    pub format: ImageFormat,
    pub quality: Quality,
    pub asset_type: AssetType,
}

impl ImageTransform {
    /// Card thumbnail: 400x225 fill crop with automatic gravity, JPEG, automatic quality
    pub fn thumbnail() -> Self {
        Self {
            width: CARD_MEDIA_WIDTH,
            height: CARD_MEDIA_HEIGHT,
            crop: Crop::Fill,
            gravity: Gravity::Auto,
            format: ImageFormat::Jpg,
            quality: Quality::Auto,
            asset_type: AssetType::Video,
        }
    }
}

/// Parameters for a video rendition of an asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoTransform {
    pub width: u32,
    pub height: u32,
    /// Backend transformation directives passed through verbatim
    #[serde(default)]
    pub raw_transformations: Vec<String>,
}

impl VideoTransform {
    pub fn preview() -> Self {
        Self {
            width: CARD_MEDIA_WIDTH,
            height: CARD_MEDIA_HEIGHT,
            raw_transformations: vec![PREVIEW_EFFECT.to_string()],
        }
    }

    pub fn full_video() -> Self {
        Self {
            width: FULL_VIDEO_WIDTH,
            height: FULL_VIDEO_HEIGHT,
            raw_transformations: Vec::new(),
        }
    }
}

/// URL construction interface of the media-transformation backend
///
/// Construction never fails. An identifier the backend does not know still
/// produces a URL; the failure surfaces when the media is loaded.
pub trait MediaUrlBuilder: Send + Sync {
    fn build_image_url(&self, asset_id: &str, transform: &ImageTransform) -> String;

    fn build_video_url(&self, asset_id: &str, transform: &VideoTransform) -> String;
}

/// Builds Cloudinary delivery URLs
///
/// Layout: `{base}/{cloud}/{resource_type}/upload/{transformations}/{public_id}[.{ext}]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CloudinaryUrlBuilder {
    base_url: String,
    cloud_name: String,
}

impl CloudinaryUrlBuilder {
    pub fn new(cloud_name: impl Into<String>) -> Self {
        Self::with_base_url(DEFAULT_MEDIA_BASE_URL, cloud_name)
    }

    pub fn with_base_url(base_url: impl Into<String>, cloud_name: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            cloud_name: cloud_name.into(),
        }
    }

    pub fn cloud_name(&self) -> &str {
        &self.cloud_name
    }

    fn delivery_url(
        &self,
        asset_type: AssetType,
        components: &[String],
        asset_id: &str,
        extension: Option<&str>,
    ) -> String {
        let mut url = format!("{}/{}/{}/upload", self.base_url, self.cloud_name, asset_type);
        for component in components {
            url.push('/');
            url.push_str(component);
        }
        url.push('/');
        url.push_str(&encode_public_id(asset_id));
        if let Some(ext) = extension {
            url.push('.');
            url.push_str(ext);
        }
        url
    }
}

impl MediaUrlBuilder for CloudinaryUrlBuilder {
    fn build_image_url(&self, asset_id: &str, transform: &ImageTransform) -> String {
        let components = vec![
            format!(
                "c_{},w_{},h_{},g_{}",
                transform.crop, transform.width, transform.height, transform.gravity
            ),
            format!("f_{}", transform.format),
            format!("q_{}", transform.quality),
        ];

        let url = self.delivery_url(
            transform.asset_type,
            &components,
            asset_id,
            Some(transform.format.extension()),
        );
        debug!(asset_id = %asset_id, url = %url, "built image url");
        url
    }

    fn build_video_url(&self, asset_id: &str, transform: &VideoTransform) -> String {
        let mut components: Vec<String> = transform
            .raw_transformations
            .iter()
            .filter(|raw| !raw.trim().is_empty())
            .cloned()
            .collect();
        components.push(format!(
            "c_{},w_{},h_{}",
            Crop::Limit,
            transform.width,
            transform.height
        ));
        components.push("f_auto".to_string());
        components.push("q_auto".to_string());

        let url = self.delivery_url(AssetType::Video, &components, asset_id, None);
        debug!(asset_id = %asset_id, url = %url, "built video url");
        url
    }
}

/// Percent-encode a public id, keeping `/` as the folder separator
fn encode_public_id(asset_id: &str) -> String {
    asset_id
        .split('/')
        .map(|segment| urlencoding::encode(segment).into_owned())
        .collect::<Vec<_>>()
        .join("/")
}

/// The three URLs a card derives from one asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaUrls {
    pub thumbnail: String,
    pub preview: String,
    pub full_video: String,
}

impl MediaUrls {
    pub fn derive(builder: &dyn MediaUrlBuilder, public_id: &str) -> Self {
        Self {
            thumbnail: thumbnail_url(builder, public_id),
            preview: preview_url(builder, public_id),
            full_video: full_video_url(builder, public_id),
        }
    }
}

pub fn thumbnail_url(builder: &dyn MediaUrlBuilder, public_id: &str) -> String {
    builder.build_image_url(public_id, &ImageTransform::thumbnail())
}

pub fn preview_url(builder: &dyn MediaUrlBuilder, public_id: &str) -> String {
    builder.build_video_url(public_id, &VideoTransform::preview())
}

pub fn full_video_url(builder: &dyn MediaUrlBuilder, public_id: &str) -> String {
    builder.build_video_url(public_id, &VideoTransform::full_video())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn builder() -> CloudinaryUrlBuilder {
        CloudinaryUrlBuilder::new("demo")
    }

    #[test]
    fn test_thumbnail_url() {
        let url = thumbnail_url(&builder(), "abc123");
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/video/upload/c_fill,w_400,h_225,g_auto/f_jpg/q_auto/abc123.jpg"
        );
    }

    #[test]
    fn test_preview_url_carries_preview_effect() {
        let url = preview_url(&builder(), "abc123");
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/video/upload/e_preview:duration_15:max_seg_9:min_seg_dur_1/c_limit,w_400,h_225/f_auto/q_auto/abc123"
        );
    }

    #[test]
    fn test_full_video_url() {
        let url = full_video_url(&builder(), "abc123");
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/video/upload/c_limit,w_1920,h_1080/f_auto/q_auto/abc123"
        );
    }

    #[test]
    fn test_custom_image_transform() {
        let transform = ImageTransform {
            width: 120,
            height: 120,
            crop: Crop::Fit,
            gravity: Gravity::Center,
            format: ImageFormat::Png,
            quality: Quality::Fixed(80),
            asset_type: AssetType::Image,
        };
        let url = builder().build_image_url("avatars/me", &transform);
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/image/upload/c_fit,w_120,h_120,g_center/f_png/q_80/avatars/me.png"
        );
    }

    #[test]
    fn test_urls_are_deterministic() {
        let b = builder();
        assert_eq!(MediaUrls::derive(&b, "abc123"), MediaUrls::derive(&b, "abc123"));
    }

    #[test]
    fn test_public_id_folders_and_encoding() {
        let url = full_video_url(&builder(), "uploads/my clip");
        assert!(url.ends_with("/uploads/my%20clip"));
    }

    #[test]
    fn test_custom_base_url_trailing_slash() {
        let b = CloudinaryUrlBuilder::with_base_url("http://localhost:9000/", "local");
        let url = full_video_url(&b, "x");
        assert!(url.starts_with("http://localhost:9000/local/video/upload/"));
        assert_eq!(b.cloud_name(), "local");
    }

    #[test]
    fn test_blank_raw_transformations_are_skipped() {
        let transform = VideoTransform {
            width: 10,
            height: 10,
            raw_transformations: vec!["  ".to_string()],
        };
        let url = builder().build_video_url("x", &transform);
        assert_eq!(
            url,
            "https://res.cloudinary.com/demo/video/upload/c_limit,w_10,h_10/f_auto/q_auto/x"
        );
    }
}
