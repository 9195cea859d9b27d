use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::format::compression_percentage;
use crate::validation::{
    validate_description, validate_duration_secs, validate_id, validate_public_id,
    validate_title,
};

/// A compressed video as produced by the upload pipeline
///
/// Sizes may arrive as JSON numbers or numeric strings (`"1048576"`); both
/// deserialize to byte counts.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Record id; falls back to the public id when absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Asset identifier on the media backend
    pub public_id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    /// Playback length in seconds
    pub duration: f64,
    #[serde(deserialize_with = "deserialize_byte_count")]
    pub original_size: u64,
    #[serde(deserialize_with = "deserialize_byte_count")]
    pub compressed_size: u64,
}

impl Video {
    /// Stable key for routing and storage
    pub fn key(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.public_id)
    }

    pub fn compression_percentage(&self) -> Option<i64> {
        compression_percentage(self.original_size, self.compressed_size)
    }

    pub fn validate(&self) -> Result<()> {
        if let Some(id) = &self.id {
            validate_id(id, "id")?;
        }
        validate_public_id(&self.public_id)?;
        validate_title(&self.title)?;
        validate_description(&self.description)?;
        validate_duration_secs(self.duration, "duration")?;
        Ok(())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ByteCountRepr {
    Integer(u64),
    Float(f64),
    Text(String),
}

fn deserialize_byte_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let float_to_bytes = |value: f64| -> std::result::Result<u64, D::Error> {
        if value.is_finite() && value >= 0.0 {
            Ok(value.round() as u64)
        } else {
            Err(D::Error::custom(format!("invalid byte count: {}", value)))
        }
    };

    match ByteCountRepr::deserialize(deserializer)? {
        ByteCountRepr::Integer(value) => Ok(value),
        ByteCountRepr::Float(value) => float_to_bytes(value),
        ByteCountRepr::Text(text) => {
            let trimmed = text.trim();
            if let Ok(value) = trimmed.parse::<u64>() {
                return Ok(value);
            }
            match trimmed.parse::<f64>() {
                Ok(value) => float_to_bytes(value),
                Err(_) => Err(D::Error::custom(format!("invalid byte count: {:?}", text))),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> serde_json::Value {
        json!({
            "publicId": "abc123",
            "title": "My Clip",
            "description": "A short clip",
            "createdAt": "2024-06-01T10:00:00Z",
            "duration": 125.0,
            "originalSize": 1000,
            "compressedSize": 250
        })
    }

    #[test]
    fn test_deserialize_numeric_sizes() {
        let video: Video = serde_json::from_value(sample()).unwrap();
        assert_eq!(video.public_id, "abc123");
        assert_eq!(video.original_size, 1000);
        assert_eq!(video.compressed_size, 250);
        assert_eq!(video.key(), "abc123");
        assert_eq!(video.compression_percentage(), Some(75));
    }

    #[test]
    fn test_deserialize_string_sizes() {
        let mut value = sample();
        value["originalSize"] = json!("1048576");
        value["compressedSize"] = json!(" 524288.4 ");
        let video: Video = serde_json::from_value(value).unwrap();
        assert_eq!(video.original_size, 1_048_576);
        assert_eq!(video.compressed_size, 524_288);
    }

    #[test]
    fn test_deserialize_rejects_bad_sizes() {
        let mut value = sample();
        value["originalSize"] = json!("lots");
        assert!(serde_json::from_value::<Video>(value).is_err());

        let mut value = sample();
        value["compressedSize"] = json!(-5);
        assert!(serde_json::from_value::<Video>(value).is_err());
    }

    #[test]
    fn test_missing_description_defaults_to_empty() {
        let mut value = sample();
        value.as_object_mut().unwrap().remove("description");
        let video: Video = serde_json::from_value(value).unwrap();
        assert_eq!(video.description, "");
    }

    #[test]
    fn test_explicit_id_is_key() {
        let mut value = sample();
        value["id"] = json!("video-7");
        let video: Video = serde_json::from_value(value).unwrap();
        assert_eq!(video.key(), "video-7");
    }

    #[test]
    fn test_serializes_camel_case() {
        let video: Video = serde_json::from_value(sample()).unwrap();
        let value = serde_json::to_value(&video).unwrap();
        assert_eq!(value["publicId"], "abc123");
        assert_eq!(value["originalSize"], 1000);
        assert!(value.get("id").is_none());
    }

    #[test]
    fn test_validate() {
        let video: Video = serde_json::from_value(sample()).unwrap();
        assert!(video.validate().is_ok());

        let mut bad = video.clone();
        bad.duration = -1.0;
        assert!(bad.validate().is_err());

        let mut bad = video.clone();
        bad.public_id = "../escape".to_string();
        assert!(bad.validate().is_err());

        let mut bad = video;
        bad.id = Some("a/b".to_string());
        assert!(bad.validate().is_err());
    }
}
