//! Relative timestamps ("3 hours ago")
//!
//! The formatter is an explicit value handed to whoever renders a card, with
//! its own clock, so rendering stays a pure function of its inputs.

use chrono::{DateTime, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a single instant
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Formats a timestamp relative to now
pub trait RelativeTime: Send + Sync {
    fn from_now(&self, timestamp: DateTime<Utc>) -> String;
}

/// English relative-time phrases with coarse thresholds
///
/// | elapsed          | output              |
/// |------------------|---------------------|
/// | < 45s            | a few seconds       |
/// | < 90s            | a minute            |
/// | < 45m            | N minutes           |
/// | < 90m            | an hour             |
/// | < 22h            | N hours             |
/// | < 36h            | a day               |
/// | < 26d            | N days              |
/// | < 45d            | a month             |
/// | < 320d           | N months            |
/// | < 548d           | a year              |
/// | otherwise        | N years             |
///
/// Past instants get an "ago" suffix, future ones an "in" prefix.
#[derive(Debug, Clone, Default)]
pub struct HumanizedRelativeTime<C = SystemClock> {
    clock: C,
}

impl HumanizedRelativeTime<SystemClock> {
    pub fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> HumanizedRelativeTime<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Phrase for an absolute elapsed interval, without direction
    pub fn humanize(elapsed_secs: i64) -> String {
        let secs = elapsed_secs.unsigned_abs() as f64;
        let minutes = secs / 60.0;
        let hours = minutes / 60.0;
        let days = hours / 24.0;

        if secs < 45.0 {
            "a few seconds".to_string()
        } else if secs < 90.0 {
            "a minute".to_string()
        } else if minutes < 45.0 {
            format!("{} minutes", minutes.round())
        } else if minutes < 90.0 {
            "an hour".to_string()
        } else if hours < 22.0 {
            format!("{} hours", hours.round())
        } else if hours < 36.0 {
            "a day".to_string()
        } else if days < 26.0 {
            format!("{} days", days.round())
        } else if days < 45.0 {
            "a month".to_string()
        } else if days < 320.0 {
            format!("{} months", (days / 30.4).round().max(2.0))
        } else if days < 548.0 {
            "a year".to_string()
        } else {
            format!("{} years", (days / 365.0).round().max(2.0))
        }
    }
}

impl<C: Clock> RelativeTime for HumanizedRelativeTime<C> {
    fn from_now(&self, timestamp: DateTime<Utc>) -> String {
        let delta = self.clock.now().signed_duration_since(timestamp).num_seconds();
        let phrase = Self::humanize(delta);
        if delta < 0 {
            format!("in {}", phrase)
        } else {
            format!("{} ago", phrase)
        }
    }
}
