use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Mutex;
use tracing::info;
use video_card::DownloadHandler;

/// A download handed over by one of the hosted cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DownloadRecord {
    pub url: String,
    pub title: String,
    pub requested_at: DateTime<Utc>,
}

/// Download handler of the gallery host
///
/// The browser performs the transfer; the host only keeps a bounded log of
/// what was requested.
#[derive(Debug, Default)]
pub struct DownloadLog {
    records: Mutex<VecDeque<DownloadRecord>>,
}

impl DownloadLog {
    const CAPACITY: usize = 1000;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> Vec<DownloadRecord> {
        self.records
            .lock()
            .map(|records| records.iter().cloned().collect())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.records.lock().map(|records| records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DownloadHandler for DownloadLog {
    fn on_download(&self, url: &str, title: &str) {
        info!(url = %url, title = %title, "download handed to client");

        let Ok(mut records) = self.records.lock() else {
            tracing::error!("download log lock poisoned, dropping record");
            return;
        };
        if records.len() >= Self::CAPACITY {
            records.pop_front();
        }
        records.push_back(DownloadRecord {
            url: url.to_string(),
            title: title.to_string(),
            requested_at: Utc::now(),
        });
    }
}
