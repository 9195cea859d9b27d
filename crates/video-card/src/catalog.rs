//! Loading video records from a JSON catalog
//!
//! A catalog is a JSON array of video records as emitted by the upload
//! pipeline. A file that is not a JSON array of records fails as a whole;
//! individual records that fail validation, or repeat an earlier key, are
//! skipped with a warning so one bad entry cannot keep the gallery down.

use common::Video;
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::error::CardError;

pub fn parse_catalog(json: &str) -> Result<Vec<Video>, CardError> {
    let records: Vec<Video> = serde_json::from_str(json)?;
    let total = records.len();

    let mut seen = HashSet::new();
    let mut videos = Vec::with_capacity(total);
    for video in records {
        if let Err(e) = video.validate() {
            let err = CardError::invalid_video(video.key(), e);
            warn!(card_id = %video.key(), error = %err, "skipping catalog entry");
            continue;
        }
        if !seen.insert(video.key().to_string()) {
            let err = CardError::Duplicate(video.key().to_string());
            warn!(card_id = %video.key(), error = %err, "skipping catalog entry");
            continue;
        }
        debug!(card_id = %video.key(), public_id = %video.public_id, "catalog entry accepted");
        videos.push(video);
    }

    if videos.len() < total {
        warn!(
            accepted = videos.len(),
            skipped = total - videos.len(),
            "catalog had rejected entries"
        );
    }

    Ok(videos)
}

pub fn load_catalog(path: &Path) -> Result<Vec<Video>, CardError> {
    let json = std::fs::read_to_string(path).map_err(|source| CardError::CatalogIo {
        path: path.to_path_buf(),
        source,
    })?;
    let videos = parse_catalog(&json)?;
    info!(path = %path.display(), count = videos.len(), "loaded video catalog");
    Ok(videos)
}
