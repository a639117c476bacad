//! # Gateway Routes
//!
//! HTTP handlers that forward list calls to the catalog servers.
//!
//! ## Request Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  POST /v1/list-races  (JSON body, may be empty)                        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  parse ListRequest ── malformed ──► 400 VALIDATION_ERROR               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  RacingClient::list_races ── gRPC error ──► ApiError (see error.rs)    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  200 { "races": [...] }                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::body::Bytes;
use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use tonic::transport::{Channel, Endpoint};
use tracing::debug;

use crate::config::GatewayConfig;
use crate::dto::{ListEventsBody, ListRacesBody, ListRequest, RecordBody};
use crate::error::ApiError;
use crate::proto::racing::{racing_client::RacingClient, ListRacesRequest};
use crate::proto::sports::{events_client::EventsClient, ListEventsRequest};

// =============================================================================
// State
// =============================================================================

/// Backend clients shared by all handlers.
///
/// Clients wrap a cloneable channel; each request clones its own handle.
#[derive(Debug, Clone)]
pub struct GatewayState {
    racing: RacingClient<Channel>,
    sports: EventsClient<Channel>,
}

impl GatewayState {
    /// Creates clients for both backends without connecting yet.
    ///
    /// Connections are established on first use, so the gateway starts even
    /// when a backend is down; calls made meanwhile fail with 503.
    pub fn connect_lazy(config: &GatewayConfig) -> Result<Self, tonic::transport::Error> {
        let racing = Endpoint::from_shared(config.racing_url.clone())?
            .connect_timeout(config.connect_timeout)
            .connect_lazy();
        let sports = Endpoint::from_shared(config.sports_url.clone())?
            .connect_timeout(config.connect_timeout)
            .connect_lazy();

        Ok(GatewayState {
            racing: RacingClient::new(racing),
            sports: EventsClient::new(sports),
        })
    }
}

// =============================================================================
// Router
// =============================================================================

/// Builds the gateway router.
pub fn router(state: GatewayState) -> Router {
    Router::new()
        .route("/v1/list-races", post(list_races))
        .route("/v1/list-events", post(list_events))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Health check endpoint.
async fn health_handler() -> impl IntoResponse {
    "OK"
}

/// Parses a list request body. Empty or whitespace-only means no filter.
fn parse_body(body: &Bytes) -> Result<ListRequest, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(ListRequest::default());
    }
    Ok(serde_json::from_slice(body)?)
}

async fn list_races(
    State(state): State<GatewayState>,
    body: Bytes,
) -> Result<Json<ListRacesBody>, ApiError> {
    let request = parse_body(&body)?;
    debug!(?request, "POST /v1/list-races");

    let mut client = state.racing.clone();
    let response = client
        .list_races(ListRacesRequest {
            filter: request.filter.map(Into::into),
        })
        .await?
        .into_inner();

    Ok(Json(ListRacesBody {
        races: response.races.into_iter().map(RecordBody::from).collect(),
    }))
}

async fn list_events(
    State(state): State<GatewayState>,
    body: Bytes,
) -> Result<Json<ListEventsBody>, ApiError> {
    let request = parse_body(&body)?;
    debug!(?request, "POST /v1/list-events");

    let mut client = state.sports.clone();
    let response = client
        .list_events(ListEventsRequest {
            filter: request.filter.map(Into::into),
        })
        .await?
        .into_inner();

    Ok(Json(ListEventsBody {
        events: response.events.into_iter().map(RecordBody::from).collect(),
    }))
}

// =============================================================================
// Tests
// =============================================================================
