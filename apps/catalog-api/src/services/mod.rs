//! gRPC service implementations.
//!
//! - [`racing_service`] - `racing.Racing/ListRaces`
//! - [`sports_service`] - `sports.Events/ListEvents`

use chrono::{DateTime, Utc};

pub mod racing_service;
pub mod sports_service;

/// Converts a UTC time to a protobuf timestamp.
pub(crate) fn to_timestamp(time: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: time.timestamp(),
        nanos: time.timestamp_subsec_nanos() as i32,
    }
}
