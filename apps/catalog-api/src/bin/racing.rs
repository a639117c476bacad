//! # Racing Server
//!
//! Serves `racing.Racing` over gRPC from `./db/racing.db`.
//!
//! ```text
//! gateway ───► gRPC (9000) ───► RacingService ───► RaceRepository ───► SQLite
//! ```

use std::sync::Arc;

use anyhow::Context;
use tonic::transport::Server;
use tracing::info;

use trackside_catalog_api::proto::racing::racing_server::RacingServer;
use trackside_catalog_api::server::open_database;
use trackside_catalog_api::telemetry::{init_tracing, shutdown_signal};
use trackside_catalog_api::{Catalog, CatalogConfig, RacingService};
use trackside_db::RaceRepository;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    info!("Starting racing server...");

    let config = CatalogConfig::load(Catalog::Racing)?;
    info!(addr = %config.grpc_addr, "Configuration loaded");

    let db = open_database(&config).await?;

    let races = Arc::new(
        RaceRepository::open(db.pool().clone())
            .await
            .context("opening the races table")?,
    );
    races.init().await.context("seeding the racing catalog")?;

    info!(addr = %config.grpc_addr, "Starting gRPC server");
    Server::builder()
        .add_service(RacingServer::new(RacingService::new(races)))
        .serve_with_shutdown(config.grpc_addr, shutdown_signal())
        .await?;

    db.close().await;
    info!("Server shutdown complete");
    Ok(())
}
