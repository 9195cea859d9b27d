use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CardError {
    #[error("unknown card event: {0}")]
    UnknownEvent(String),

    #[error("card not found: {0}")]
    NotFound(String),

    #[error("duplicate card id: {0}")]
    Duplicate(String),

    #[error("invalid video {key}: {reason}")]
    InvalidVideo { key: String, reason: String },

    #[error("failed to read catalog {path}: {source}")]
    CatalogIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed catalog: {0}")]
    CatalogFormat(#[from] serde_json::Error),
}

impl CardError {
    pub fn invalid_video(key: impl Into<String>, err: anyhow::Error) -> Self {
        Self::InvalidVideo {
            key: key.into(),
            reason: format!("{:#}", err),
        }
    }
}
