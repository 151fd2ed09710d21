//! Frontend Models
//!
//! Data structures matching the contributions service, plus the display
//! status derived from a record's time window.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// One video contribution as returned by the listing endpoint.
///
/// The service owns these records; this layer never mutates them. The
/// `start_time <= end_time` invariant is assumed, not enforced here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contribution {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub owner: String,
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Utc>,
    #[serde(rename = "endTime")]
    pub end_time: DateTime<Utc>,
}

/// Response shape of `GET /contributions/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContributionPage {
    pub contributions: Vec<Contribution>,
    pub total: u64,
}

/// Display status of a contribution relative to its time window.
///
/// Derived fresh on every render from the current clock; never persisted,
/// never reactive to clock ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Scheduled,
    Active,
    Complete,
}

impl Status {
    /// Status of the window `[start, end]` at `now`, bounds inclusive.
    pub fn of_window(now: DateTime<Utc>, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        if now < start {
            Status::Scheduled
        } else if now <= end {
            Status::Active
        } else {
            Status::Complete
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Status::Scheduled => "Scheduled",
            Status::Active => "Active",
            Status::Complete => "Complete",
        }
    }

    /// Modifier class for the status badge.
    pub fn css_class(&self) -> &'static str {
        match self {
            Status::Scheduled => "status-scheduled",
            Status::Active => "status-active",
            Status::Complete => "status-complete",
        }
    }
}

impl Contribution {
    pub fn status_at(&self, now: DateTime<Utc>) -> Status {
        Status::of_window(now, self.start_time, self.end_time)
    }
}

/// Card timestamp text, e.g. "May 1, 2025, 9:30:00 AM".
///
/// Timezone-generic so callers can render in local time while tests feed
/// fixed offsets.
pub fn format_timestamp<Tz: TimeZone>(ts: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    ts.format("%b %-d, %Y, %-I:%M:%S %p").to_string()
}
