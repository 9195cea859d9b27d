//! Input validation for video records entering the gallery
//!
//! Records arrive from the upload pipeline or a catalog file. Nothing here
//! panics; every check returns a descriptive error instead.

use anyhow::{anyhow, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// CONSTANTS: Input Size Limits
// ============================================================================

/// Maximum length for public ids and record ids
pub const MAX_ID_LENGTH: usize = 256;

/// Maximum length for titles
pub const MAX_TITLE_LENGTH: usize = 512;

/// Maximum length for descriptions
pub const MAX_DESCRIPTION_LENGTH: usize = 4096;

/// Longest duration accepted for a single video (one week)
pub const MAX_DURATION_SECS: f64 = 7.0 * 24.0 * 3600.0;

/// Characters that would end or re-encode a URL path: query, fragment,
/// percent escapes, backslashes and control characters
#[allow(clippy::expect_used)]
static PUBLIC_ID_FORBIDDEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[?#%\\\p{Cc}]").expect("valid public id pattern"));

// ============================================================================
// String Validation
// ============================================================================

/// Validate string length against a maximum
pub fn validate_length(value: &str, max_length: usize, field_name: &str) -> Result<()> {
    if value.len() > max_length {
        return Err(anyhow!(
            "{} exceeds maximum length of {} bytes (got {})",
            field_name,
            max_length,
            value.len()
        ));
    }
    Ok(())
}

/// Validate non-empty string
pub fn validate_non_empty(value: &str, field_name: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(anyhow!("{} cannot be empty", field_name));
    }
    Ok(())
}

/// Validate a record id used in routes (no path separators)
pub fn validate_id(id: &str, field_name: &str) -> Result<()> {
    validate_non_empty(id, field_name)?;
    validate_length(id, MAX_ID_LENGTH, field_name)?;

    if id.contains("..") || id.contains('/') || id.contains('\\') {
        return Err(anyhow!(
            "{} contains invalid characters (no path separators or '..' allowed)",
            field_name
        ));
    }

    Ok(())
}

/// Validate a media public id
///
/// Public ids are opaque: any Unicode text is accepted as long as it stays
/// inside the URL path. Folders are allowed (`uploads/clip`), traversal
/// segments are not.
pub fn validate_public_id(public_id: &str) -> Result<()> {
    validate_non_empty(public_id, "public_id")?;
    validate_length(public_id, MAX_ID_LENGTH, "public_id")?;

    if public_id.split('/').any(|segment| segment == "." || segment == "..") {
        return Err(anyhow!("public_id contains '.' or '..' path segments"));
    }

    if let Some(found) = PUBLIC_ID_FORBIDDEN.find(public_id) {
        return Err(anyhow!(
            "public_id contains forbidden character {:?}",
            found.as_str()
        ));
    }

    Ok(())
}

/// Titles are display text; an empty title is rendered as-is
pub fn validate_title(title: &str) -> Result<()> {
    validate_length(title, MAX_TITLE_LENGTH, "title")
}

pub fn validate_description(description: &str) -> Result<()> {
    validate_length(description, MAX_DESCRIPTION_LENGTH, "description")
}

// ============================================================================
// Numeric Validation
// ============================================================================

/// Validate a playback duration in seconds
pub fn validate_duration_secs(secs: f64, field_name: &str) -> Result<()> {
    if !secs.is_finite() || secs < 0.0 {
        return Err(anyhow!(
            "{} must be a non-negative number of seconds, got {}",
            field_name,
            secs
        ));
    }
    if secs > MAX_DURATION_SECS {
        return Err(anyhow!(
            "{} exceeds maximum of {} seconds (got {})",
            field_name,
            MAX_DURATION_SECS,
            secs
        ));
    }
    Ok(())
}
