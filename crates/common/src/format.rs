//! Human-readable formatting for card metadata
//!
//! Byte counts render with decimal (SI) units, durations as `M:SS`, and the
//! compression ratio as a whole percentage.

/// Decimal unit symbols, one per power of 1000
const SIZE_UNITS: [&str; 9] = ["B", "kB", "MB", "GB", "TB", "PB", "EB", "ZB", "YB"];

const SIZE_BASE: f64 = 1000.0;

/// Format a byte count as a human-readable size
///
/// Values are scaled by powers of 1000 and rounded to two decimals with
/// trailing zeros dropped: `265318` becomes `"265.32 kB"`, `1000` becomes
/// `"1 kB"`. A value that rounds up to a full 1000 of its unit is promoted
/// to the next unit.
pub fn format_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut scaled = bytes as f64;
    let mut exponent = 0;
    while scaled >= SIZE_BASE && exponent < SIZE_UNITS.len() - 1 {
        scaled /= SIZE_BASE;
        exponent += 1;
    }
    let mut value = round_to(scaled, 2);

    if value >= SIZE_BASE && exponent < SIZE_UNITS.len() - 1 {
        value = 1.0;
        exponent += 1;
    }

    format!("{} {}", trim_decimal(value), SIZE_UNITS[exponent])
}

/// Format a duration in seconds as `M:SS`
///
/// The remainder is rounded to the nearest second. A remainder that rounds
/// to 60 carries into the minutes, so `119.6` renders as `"2:00"`.
/// Negative and non-finite input renders as `"0:00"`.
pub fn format_duration(seconds: f64) -> String {
    if !seconds.is_finite() || seconds <= 0.0 {
        return "0:00".to_string();
    }

    let mut minutes = (seconds / 60.0).floor() as u64;
    let mut remainder = (seconds % 60.0).round() as u64;
    if remainder >= 60 {
        minutes += remainder / 60;
        remainder %= 60;
    }

    format!("{}:{:02}", minutes, remainder)
}

/// Percentage of bytes saved by compression
///
/// Computed as `round((1 - compressed / original) * 100)`. The result is not
/// clamped: a compressed file larger than its original yields a negative
/// value. Returns `None` when `original` is zero.
pub fn compression_percentage(original: u64, compressed: u64) -> Option<i64> {
    if original == 0 {
        return None;
    }

    let ratio = compressed as f64 / original as f64;
    Some(((1.0 - ratio) * 100.0).round() as i64)
}

/// Render an optional compression percentage for display
pub fn format_percentage(percentage: Option<i64>) -> String {
    match percentage {
        Some(value) => format!("{}%", value),
        None => "—".to_string(),
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

fn trim_decimal(value: f64) -> String {
    let text = format!("{:.2}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}
