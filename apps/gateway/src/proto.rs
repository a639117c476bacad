//! Generated gRPC client code for the catalog servers.
//!
//! - `racing::racing_client::RacingClient` - `racing.Racing/ListRaces`
//! - `sports::events_client::EventsClient` - `sports.Events/ListEvents`

/// `racing` proto package.
pub mod racing {
    tonic::include_proto!("racing");
}

/// `sports` proto package.
pub mod sports {
    tonic::include_proto!("sports");
}
