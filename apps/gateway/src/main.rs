//! Trackside HTTP gateway binary.

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::info;

use trackside_gateway::telemetry::{init_tracing, shutdown_signal};
use trackside_gateway::{router, GatewayConfig, GatewayState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = GatewayConfig::load().context("Failed to load gateway configuration")?;
    info!(
        addr = %config.addr,
        racing = %config.racing_url,
        sports = %config.sports_url,
        "Starting Trackside gateway"
    );

    let state = GatewayState::connect_lazy(&config).context("Invalid backend endpoint")?;
    let app = router(state);

    let listener = TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Gateway server error")?;

    info!("Gateway stopped");
    Ok(())
}
