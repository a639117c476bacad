//! Sports gRPC service implementation.
//!
//! Serves `sports.Events/ListEvents` from the sports catalog.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use trackside_core::{Event, ListFilter};
use trackside_db::CatalogRepository;

use super::to_timestamp;
use crate::error::ServiceError;
use crate::proto::sports::{
    events_server::Events, Event as EventMessage, ListEventsRequest, ListEventsRequestFilter,
    ListEventsResponse,
};

/// Sports service implementation.
pub struct SportsService<S> {
    events: Arc<S>,
}

impl<S> SportsService<S>
where
    S: CatalogRepository<Event> + 'static,
{
    /// Create a new sports service over an initialized repository.
    pub fn new(events: Arc<S>) -> Self {
        SportsService { events }
    }
}

#[tonic::async_trait]
impl<S> Events for SportsService<S>
where
    S: CatalogRepository<Event> + 'static,
{
    async fn list_events(
        &self,
        request: Request<ListEventsRequest>,
    ) -> Result<Response<ListEventsResponse>, Status> {
        let filter = request.into_inner().filter.map(ListFilter::from);
        debug!(?filter, "ListEvents");

        let events = self.events.list(filter.as_ref()).await.map_err(|e| {
            warn!(error = %e, "ListEvents failed");
            ServiceError::from(e)
        })?;

        Ok(Response::new(ListEventsResponse {
            events: events.into_iter().map(EventMessage::from).collect(),
        }))
    }
}

impl From<ListEventsRequestFilter> for ListFilter {
    fn from(filter: ListEventsRequestFilter) -> Self {
        ListFilter {
            meeting_ids: filter.meeting_ids,
            visible_only: filter.visible_only,
            sort_by: filter.sort_by,
            order: filter.order,
        }
    }
}

impl From<Event> for EventMessage {
    fn from(event: Event) -> Self {
        EventMessage {
            id: event.id,
            meeting_id: event.meeting_id,
            name: event.name,
            number: event.number,
            visible: event.visible,
            advertised_start_time: Some(to_timestamp(event.advertised_start_time)),
            status: event.status.as_str().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tonic::Code;
    use trackside_db::{Database, DbConfig, EventRepository};

    async fn service() -> SportsService<EventRepository> {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let events = EventRepository::open(db.pool().clone()).await.unwrap();
        events.init().await.unwrap();
        SportsService::new(Arc::new(events))
    }

    #[tokio::test]
    async fn test_list_events_against_seeded_catalog() {
        let service = service().await;

        let request = Request::new(ListEventsRequest {
            filter: Some(ListEventsRequestFilter {
                meeting_ids: vec![1, 2, 3],
                visible_only: true,
                sort_by: "id".to_string(),
                order: "ascending".to_string(),
            }),
        });
        let events = service.list_events(request).await.unwrap().into_inner().events;

        assert!(!events.is_empty());
        assert!(events.iter().all(|e| e.visible));
        assert!(events.iter().all(|e| [1, 2, 3].contains(&e.meeting_id)));
        assert!(events.windows(2).all(|pair| pair[0].id < pair[1].id));
        assert!(events
            .iter()
            .all(|e| e.status == "OPEN" || e.status == "CLOSED"));
        assert!(events.iter().all(|e| e.advertised_start_time.is_some()));
    }

    #[tokio::test]
    async fn test_no_filter_lists_everything() {
        let service = service().await;

        let events = service
            .list_events(Request::new(ListEventsRequest { filter: None }))
            .await
            .unwrap()
            .into_inner()
            .events;
        assert_eq!(events.len() as i64, trackside_db::seed::SEED_ROW_COUNT);
    }

    #[tokio::test]
    async fn test_uninitialized_catalog_lists_nothing() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let events = EventRepository::open(db.pool().clone()).await.unwrap();
        let service = SportsService::new(Arc::new(events));

        let events = service
            .list_events(Request::new(ListEventsRequest { filter: None }))
            .await
            .unwrap()
            .into_inner()
            .events;
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_sort_field_is_invalid_argument() {
        let service = service().await;

        let request = Request::new(ListEventsRequest {
            filter: Some(ListEventsRequestFilter {
                sort_by: "level".to_string(),
                ..Default::default()
            }),
        });
        let status = service.list_events(request).await.unwrap_err();

        assert_eq!(status.code(), Code::InvalidArgument);
        assert!(status.message().contains("sort_by"));
    }
}
