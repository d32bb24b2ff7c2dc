//! Time intervals for phenomenon, result, and valid times.
//!
//! SensorThings time properties are either instants or half-open intervals.
//! Both are represented by [`TimeInterval`]: an instant is an interval whose
//! end is absent.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open time window `[start, end)`.
///
/// `end == None` means the interval is an instant (or still open, for a
/// datastream whose observations are ongoing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeInterval {
    pub start: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end: Option<DateTime<Utc>>,
}

impl TimeInterval {
    /// Creates an interval from start and end.
    #[must_use]
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start,
            end: Some(end),
        }
    }

    /// Creates an instant (interval without an end).
    #[must_use]
    pub const fn instant(at: DateTime<Utc>) -> Self {
        Self {
            start: at,
            end: None,
        }
    }

    /// Returns true if this interval is an instant.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.end.is_none()
    }

    /// Returns true if the end (when present) does not precede the start.
    ///
    /// A reversed interval is representable (snapshots are taken as-is from
    /// persistence) but callers validating client input should reject it.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        match self.end {
            Some(end) => end >= self.start,
            None => true,
        }
    }

    /// Extends this interval to cover a new instant.
    ///
    /// Used when appending an observation to a datastream's phenomenon time.
    #[must_use]
    pub fn extended_to(&self, at: DateTime<Utc>) -> Self {
        let start = self.start.min(at);
        let end = Some(self.end.map_or_else(
            || self.start.max(at),
            |current| current.max(at),
        ));
        Self { start, end }
    }
}

impl From<DateTime<Utc>> for TimeInterval {
    fn from(at: DateTime<Utc>) -> Self {
        Self::instant(at)
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "{}/{}", self.start.to_rfc3339(), end.to_rfc3339()),
            None => write!(f, "{}", self.start.to_rfc3339()),
        }
    }
}
