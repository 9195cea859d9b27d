use common::Video;
use std::collections::HashMap;
use std::sync::Arc;
use video_card::{CardError, CardEvent, DownloadHandler, VideoCard};

/// Cards hosted by the gallery, keyed by video key
pub struct CardStore {
    cards: HashMap<String, VideoCard>,
    on_download: Arc<dyn DownloadHandler>,
}

impl CardStore {
    pub fn new(on_download: Arc<dyn DownloadHandler>) -> Self {
        Self {
            cards: HashMap::new(),
            on_download,
        }
    }

    pub fn insert(&mut self, video: Video) -> Result<&VideoCard, CardError> {
        video
            .validate()
            .map_err(|e| CardError::invalid_video(video.key(), e))?;

        let key = video.key().to_string();
        if self.cards.contains_key(&key) {
            return Err(CardError::Duplicate(key));
        }

        let card = VideoCard::new(video, self.on_download.clone());
        Ok(self.cards.entry(key).or_insert(card))
    }

    pub fn get(&self, id: &str) -> Result<&VideoCard, CardError> {
        self.cards
            .get(id)
            .ok_or_else(|| CardError::NotFound(id.to_string()))
    }

    pub fn get_mut(&mut self, id: &str) -> Result<&mut VideoCard, CardError> {
        self.cards
            .get_mut(id)
            .ok_or_else(|| CardError::NotFound(id.to_string()))
    }

    /// Apply an event to one card, returning whether its view changed
    pub fn dispatch(&mut self, id: &str, event: CardEvent) -> Result<bool, CardError> {
        Ok(self.get_mut(id)?.handle(event))
    }

    /// Cards, newest upload first
    pub fn list(&self) -> Vec<&VideoCard> {
        let mut cards: Vec<&VideoCard> = self.cards.values().collect();
        cards.sort_by(|a, b| {
            b.video()
                .created_at
                .cmp(&a.video().created_at)
                .then_with(|| a.key().cmp(b.key()))
        });
        cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
