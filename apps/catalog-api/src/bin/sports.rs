//! # Sports Server
//!
//! Serves `sports.Events` over gRPC from `./db/events.db`.
//!
//! ```text
//! gateway ───► gRPC (9999) ───► SportsService ───► EventRepository ───► SQLite
//! ```

use std::sync::Arc;

use anyhow::Context;
use tonic::transport::Server;
use tracing::info;

use trackside_catalog_api::proto::sports::events_server::EventsServer;
use trackside_catalog_api::server::open_database;
use trackside_catalog_api::telemetry::{init_tracing, shutdown_signal};
use trackside_catalog_api::{Catalog, CatalogConfig, SportsService};
use trackside_db::EventRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting sports server...");

    let config = CatalogConfig::load(Catalog::Sports)?;
    info!(addr = %config.grpc_addr, "Configuration loaded");

    let db = open_database(&config).await?;

    let events = Arc::new(
        EventRepository::open(db.pool().clone())
            .await
            .context("opening the events table")?,
    );
    events.init().await.context("seeding the sports catalog")?;

    info!(addr = %config.grpc_addr, "Starting gRPC server");
    Server::builder()
        .add_service(EventsServer::new(SportsService::new(events)))
        .serve_with_shutdown(config.grpc_addr, shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}
