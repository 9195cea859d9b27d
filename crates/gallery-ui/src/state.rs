use anyhow::Result;
use common::{CloudinaryUrlBuilder, HumanizedRelativeTime, Video};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::info;
use video_card::catalog::load_catalog;
use video_card::RenderContext;

use crate::config::Config;
use crate::downloads::DownloadLog;
use crate::store::CardStore;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub render: RenderContext,
    pub card_store: Arc<RwLock<CardStore>>,
    pub downloads: Arc<DownloadLog>,
}

impl AppState {
    /// Build state from config, loading the catalog if one is configured
    pub fn new(config: Config) -> Result<Self> {
        let urls = CloudinaryUrlBuilder::with_base_url(&config.media_base_url, &config.cloud_name);
        let render = RenderContext::new(Arc::new(urls), Arc::new(HumanizedRelativeTime::new()));

        let videos = match &config.catalog_path {
            Some(path) => load_catalog(path)?,
            None => Vec::new(),
        };

        Self::with_context(config, render, videos)
    }

    /// Build state around explicit collaborators
    pub fn with_context(config: Config, render: RenderContext, videos: Vec<Video>) -> Result<Self> {
        let downloads = Arc::new(DownloadLog::new());
        let mut store = CardStore::new(downloads.clone());
        for video in videos {
            store.insert(video)?;
        }
        info!(cards = store.len(), "card store initialized");

        Ok(Self {
            config,
            render,
            card_store: Arc::new(RwLock::new(store)),
            downloads,
        })
    }
}
