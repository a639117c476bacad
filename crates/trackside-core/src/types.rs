//! # Domain Types
//!
//! Records returned by the racing and sports catalogs.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────────────┐        ┌─────────────────────────┐        │
//! │  │         Race            │        │         Event           │        │
//! │  │  ─────────────────────  │        │  ─────────────────────  │        │
//! │  │  id (storage assigned)  │        │  id (storage assigned)  │        │
//! │  │  meeting_id             │        │  meeting_id             │        │
//! │  │  name, number, visible  │        │  name, number, visible  │        │
//! │  │  advertised_start_time  │        │  advertised_start_time  │        │
//! │  │  status (derived)       │        │  status (derived)       │        │
//! │  └────────────┬────────────┘        └────────────┬────────────┘        │
//! │               └──────────────┬───────────────────┘                     │
//! │                              ▼                                          │
//! │                   CatalogRecord::from_fields                            │
//! │                   (shared row materializer)                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Status
//! `status` is never stored. It is recomputed on every read from the
//! advertised start time and the wall clock at materialization time, so the
//! same stored row can be OPEN on one call and CLOSED on the next.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Status
// =============================================================================

/// Lifecycle status of a race or event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    /// The advertised start time has not passed yet.
    Open,
    /// The current time is strictly after the advertised start time.
    Closed,
}

impl Status {
    /// Derives the status of a record starting at `advertised_start` as seen at `now`.
    ///
    /// ```rust
    /// use chrono::{Duration, Utc};
    /// use trackside_core::Status;
    ///
    /// let now = Utc::now();
    /// assert_eq!(Status::at(now, now), Status::Open);
    /// assert_eq!(Status::at(now - Duration::seconds(1), now), Status::Closed);
    /// ```
    pub fn at(advertised_start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        if now > advertised_start {
            Status::Closed
        } else {
            Status::Open
        }
    }

    /// Wire representation (`"OPEN"` / `"CLOSED"`).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "OPEN",
            Status::Closed => "CLOSED",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Record Fields
// =============================================================================

/// Decoded columns of one catalog row, plus its derived status.
///
/// Both catalogs share the same column layout; only the record type differs.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordFields {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: Status,
}

/// A record type the shared row materializer can produce.
pub trait CatalogRecord: Sized {
    /// Entity name used in log fields ("race", "event").
    const ENTITY: &'static str;

    /// Builds the record from decoded columns.
    fn from_fields(fields: RecordFields) -> Self;
}

// =============================================================================
// Race
// =============================================================================

/// A race in the racing catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Race {
    /// Unique identifier, assigned by storage.
    pub id: i64,

    /// Meeting this race belongs to.
    pub meeting_id: i64,

    /// Display name.
    pub name: String,

    /// Race number within the meeting.
    pub number: i64,

    /// Whether the race is shown to customers.
    pub visible: bool,

    /// Advertised start time.
    pub advertised_start_time: DateTime<Utc>,

    /// OPEN or CLOSED, derived at read time.
    pub status: Status,
}

impl CatalogRecord for Race {
    const ENTITY: &'static str = "race";

    fn from_fields(fields: RecordFields) -> Self {
        Race {
            id: fields.id,
            meeting_id: fields.meeting_id,
            name: fields.name,
            number: fields.number,
            visible: fields.visible,
            advertised_start_time: fields.advertised_start_time,
            status: fields.status,
        }
    }
}

// =============================================================================
// Event
// =============================================================================

/// A sporting event in the sports catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: DateTime<Utc>,
    pub status: Status,
}

impl CatalogRecord for Event {
    const ENTITY: &'static str = "event";

    fn from_fields(fields: RecordFields) -> Self {
        Event {
            id: fields.id,
            meeting_id: fields.meeting_id,
            name: fields.name,
            number: fields.number,
            visible: fields.visible,
            advertised_start_time: fields.advertised_start_time,
            status: fields.status,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn fields(status: Status) -> RecordFields {
        RecordFields {
            id: 7,
            meeting_id: 3,
            name: "Flemington".to_string(),
            number: 4,
            visible: true,
            advertised_start_time: Utc.with_ymd_and_hms(2021, 3, 2, 1, 0, 0).unwrap(),
            status,
        }
    }

    #[test]
    fn test_status_closed_only_when_strictly_after_start() {
        let start = Utc.with_ymd_and_hms(2021, 3, 2, 1, 0, 0).unwrap();

        assert_eq!(Status::at(start, start - Duration::minutes(5)), Status::Open);
        assert_eq!(Status::at(start, start), Status::Open);
        assert_eq!(
            Status::at(start, start + Duration::nanoseconds(1)),
            Status::Closed
        );
    }

    #[test]
    fn test_status_serializes_as_screaming_case() {
        assert_eq!(serde_json::to_string(&Status::Open).unwrap(), "\"OPEN\"");
        assert_eq!(serde_json::to_string(&Status::Closed).unwrap(), "\"CLOSED\"");
        assert_eq!(Status::Closed.to_string(), "CLOSED");
    }

    #[test]
    fn test_records_copy_every_field() {
        let race = Race::from_fields(fields(Status::Closed));
        assert_eq!(race.id, 7);
        assert_eq!(race.meeting_id, 3);
        assert_eq!(race.name, "Flemington");
        assert_eq!(race.number, 4);
        assert!(race.visible);
        assert_eq!(race.status, Status::Closed);

        let event = Event::from_fields(fields(Status::Open));
        assert_eq!(event.advertised_start_time, race.advertised_start_time);
        assert_eq!(event.status, Status::Open);
    }
}
