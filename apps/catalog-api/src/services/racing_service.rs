//! Racing gRPC service implementation.
//!
//! Translates `racing.Racing/ListRaces` requests into repository calls and
//! races back into wire messages.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use trackside_core::{ListFilter, Race};
use trackside_db::CatalogRepository;

use super::to_timestamp;
use crate::error::ServiceError;
use crate::proto::racing::{
    racing_server::Racing, ListRacesRequest, ListRacesRequestFilter, ListRacesResponse,
    Race as RaceMessage,
};

/// Racing service implementation.
pub struct RacingService<S> {
    races: Arc<S>,
}

impl<S> RacingService<S>
where
    S: CatalogRepository<Race> + 'static,
{
    /// Create a new racing service over an initialized repository.
    pub fn new(races: Arc<S>) -> Self {
        RacingService { races }
    }
}

#[tonic::async_trait]
impl<S> Racing for RacingService<S>
where
    S: CatalogRepository<Race> + 'static,
{
    async fn list_races(
        &self,
        request: Request<ListRacesRequest>,
    ) -> Result<Response<ListRacesResponse>, Status> {
        let filter = request.into_inner().filter.map(ListFilter::from);
        debug!(?filter, "ListRaces");

        let races = self.races.list(filter.as_ref()).await.map_err(|e| {
            warn!(error = %e, "ListRaces failed");
            ServiceError::from(e)
        })?;

        Ok(Response::new(ListRacesResponse {
            races: races.into_iter().map(RaceMessage::from).collect(),
        }))
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<ListRacesRequestFilter> for ListFilter {
    fn from(filter: ListRacesRequestFilter) -> Self {
        ListFilter {
            meeting_ids: filter.meeting_ids,
            visible_only: filter.visible_only,
            sort_by: filter.sort_by,
            order: filter.order,
        }
    }
}

impl From<Race> for RaceMessage {
    fn from(race: Race) -> Self {
        RaceMessage {
            id: race.id,
            meeting_id: race.meeting_id,
            name: race.name,
            number: race.number,
            visible: race.visible,
            advertised_start_time: Some(to_timestamp(race.advertised_start_time)),
            status: race.status.as_str().to_string(),
        }
    }
}
