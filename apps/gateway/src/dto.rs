//! # JSON Request/Response Bodies
//!
//! The HTTP shapes of the two list calls and their conversions to and from
//! the generated gRPC messages.
//!
//! ## Wire Shape
//! ```text
//! POST /v1/list-races
//! { "filter": { "meeting_ids": [1, 2], "visible_only": true,
//!               "sort_by": "number", "order": "asc" } }
//!
//! 200 OK
//! { "races": [ { "id": 1, "meeting_id": 1, "name": "Flemington",
//!                "number": 3, "visible": true,
//!                "advertised_start_time": "2021-03-02T01:00:00Z",
//!                "status": "OPEN" } ] }
//! ```
//!
//! Field names are snake_case. camelCase names (`meetingIds`, `visibleOnly`,
//! `sortBy`) are accepted on input. Every filter field is optional and the
//! whole filter may be omitted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::proto::{racing, sports};

// =============================================================================
// Requests
// =============================================================================

/// Body of a list request. An empty body is the same as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ListRequest {
    pub filter: Option<FilterBody>,
}

/// Filter criteria, shared by both catalogs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FilterBody {
    #[serde(alias = "meetingIds")]
    pub meeting_ids: Vec<i64>,

    #[serde(alias = "visibleOnly")]
    pub visible_only: bool,

    #[serde(alias = "sortBy")]
    pub sort_by: String,

    pub order: String,
}

impl From<FilterBody> for racing::ListRacesRequestFilter {
    fn from(filter: FilterBody) -> Self {
        racing::ListRacesRequestFilter {
            meeting_ids: filter.meeting_ids,
            visible_only: filter.visible_only,
            sort_by: filter.sort_by,
            order: filter.order,
        }
    }
}

impl From<FilterBody> for sports::ListEventsRequestFilter {
    fn from(filter: FilterBody) -> Self {
        sports::ListEventsRequestFilter {
            meeting_ids: filter.meeting_ids,
            visible_only: filter.visible_only,
            sort_by: filter.sort_by,
            order: filter.order,
        }
    }
}

// =============================================================================
// Responses
// =============================================================================

/// A race or event as rendered in JSON.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordBody {
    pub id: i64,
    pub meeting_id: i64,
    pub name: String,
    pub number: i64,
    pub visible: bool,
    pub advertised_start_time: Option<DateTime<Utc>>,
    pub status: String,
}

/// Reply to `POST /v1/list-races`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListRacesBody {
    pub races: Vec<RecordBody>,
}

/// Reply to `POST /v1/list-events`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEventsBody {
    pub events: Vec<RecordBody>,
}

/// Converts a protobuf timestamp. Out-of-range values render as `null`.
fn from_timestamp(ts: Option<prost_types::Timestamp>) -> Option<DateTime<Utc>> {
    let ts = ts?;
    let nanos = u32::try_from(ts.nanos).ok()?;
    DateTime::from_timestamp(ts.seconds, nanos)
}

impl From<racing::Race> for RecordBody {
    fn from(race: racing::Race) -> Self {
        RecordBody {
            id: race.id,
            meeting_id: race.meeting_id,
            name: race.name,
            number: race.number,
            visible: race.visible,
            advertised_start_time: from_timestamp(race.advertised_start_time),
            status: race.status,
        }
    }
}

impl From<sports::Event> for RecordBody {
    fn from(event: sports::Event) -> Self {
        RecordBody {
            id: event.id,
            meeting_id: event.meeting_id,
            name: event.name,
            number: event.number,
            visible: event.visible,
            advertised_start_time: from_timestamp(event.advertised_start_time),
            status: event.status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_accepts_snake_and_camel_case() {
        let snake: ListRequest = serde_json::from_value(json!({
            "filter": { "meeting_ids": [1, 2], "visible_only": true, "sort_by": "number", "order": "asc" }
        }))
        .unwrap();
        let camel: ListRequest = serde_json::from_value(json!({
            "filter": { "meetingIds": [1, 2], "visibleOnly": true, "sortBy": "number", "order": "asc" }
        }))
        .unwrap();

        assert_eq!(snake, camel);
        let filter = snake.filter.unwrap();
        assert_eq!(filter.meeting_ids, vec![1, 2]);
        assert!(filter.visible_only);
    }

    #[test]
    fn test_missing_fields_default() {
        let request: ListRequest = serde_json::from_value(json!({})).unwrap();
        assert_eq!(request.filter, None);

        let request: ListRequest = serde_json::from_value(json!({ "filter": {} })).unwrap();
        assert_eq!(request.filter, Some(FilterBody::default()));
    }

    #[test]
    fn test_race_renders_rfc3339_time() {
        let body = RecordBody::from(racing::Race {
            id: 7,
            meeting_id: 3,
            name: "Randwick".to_string(),
            number: 2,
            visible: false,
            advertised_start_time: Some(prost_types::Timestamp {
                seconds: 1_614_646_800,
                nanos: 0,
            }),
            status: "CLOSED".to_string(),
        });

        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["advertised_start_time"], "2021-03-02T01:00:00Z");
        assert_eq!(value["status"], "CLOSED");
        assert_eq!(value["meeting_id"], 3);
    }

    #[test]
    fn test_missing_or_invalid_timestamp_is_null() {
        assert_eq!(from_timestamp(None), None);
        assert_eq!(
            from_timestamp(Some(prost_types::Timestamp {
                seconds: 0,
                nanos: -1
            })),
            None
        );
    }
}
