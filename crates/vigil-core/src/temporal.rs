//! # Temporal Types
//!
//! UTC-only timestamp type for the Vigil stack. All timestamps are stored
//! in UTC with second-level precision and a `Z` suffix in serialized form.
//!
//! ## Design Decision
//!
//! Monitored health systems span US time zones, and regulatory reporting
//! deadlines (HIPAA 60-day notification, FDA 30-day reporting) are computed
//! from the detection instant. To prevent ambiguity in deadline arithmetic
//! and audit records, all timestamps are UTC. Local time conversion is a
//! presentation concern handled at the caller's layer.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp with second-level precision.
///
/// Serializes to ISO 8601 format with `Z` suffix (e.g., `2026-01-15T12:00:00Z`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// Return a timestamp the given number of whole days later.
    ///
    /// Used for framework-mandated reporting deadlines (`detection + N days`).
    pub fn plus_days(&self, days: u32) -> Self {
        Self(self.0 + Duration::days(i64::from(days)))
    }

    /// Return a timestamp the given number of whole hours later.
    pub fn plus_hours(&self, hours: u32) -> Self {
        Self(self.0 + Duration::hours(i64::from(hours)))
    }

    /// Return the timestamp as an ISO 8601 string with Z suffix,
    /// truncated to seconds.
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}
