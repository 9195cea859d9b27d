use anyhow::{Context, Result};
use common::media_urls::DEFAULT_MEDIA_BASE_URL;
use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: String,
    /// Cloud the media assets are stored under
    pub cloud_name: String,
    pub media_base_url: String,
    /// JSON array of videos to host at startup
    pub catalog_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8091".to_string(),
            cloud_name: "demo".to_string(),
            media_base_url: DEFAULT_MEDIA_BASE_URL.to_string(),
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            bind_addr: env::var("GALLERY_UI_ADDR").unwrap_or(defaults.bind_addr),
            cloud_name: env::var("CLOUDINARY_CLOUD_NAME").unwrap_or(defaults.cloud_name),
            media_base_url: env::var("MEDIA_BASE_URL").unwrap_or(defaults.media_base_url),
            catalog_path: env::var("CATALOG_PATH")
                .ok()
                .filter(|p| !p.trim().is_empty())
                .map(PathBuf::from),
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.socket_addr()?;
        if self.cloud_name.trim().is_empty() {
            anyhow::bail!("CLOUDINARY_CLOUD_NAME cannot be empty");
        }
        if !self.media_base_url.starts_with("http://") && !self.media_base_url.starts_with("https://") {
            anyhow::bail!("MEDIA_BASE_URL must be an http(s) URL, got {}", self.media_base_url);
        }
        Ok(())
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_addr
            .parse()
            .with_context(|| format!("invalid bind address: {}", self.bind_addr))
    }
}
