//! Generated gRPC code for the racing and sports catalogs.
//!
//! ## Services Available
//! - `racing::racing_server::RacingServer` / `racing::racing_client::RacingClient`
//! - `sports::events_server::EventsServer` / `sports::events_client::EventsClient`

/// `racing` proto package.
pub mod racing {
    tonic::include_proto!("racing");
}

/// `sports` proto package.
pub mod sports {
    tonic::include_proto!("sports");
}
