//! Server startup shared by the `racing` and `sports` binaries.
//!
//! ```text
//! load config → open pool → health check → repo.init() → serve until signal → close pool
//! ```

use anyhow::Context;
use tracing::info;

use trackside_db::{Database, DbConfig};

use crate::config::CatalogConfig;

/// Opens the catalog's database and checks it answers queries.
pub async fn open_database(config: &CatalogConfig) -> anyhow::Result<Database> {
    let db_config = DbConfig::new(&config.db_path)
        .max_connections(config.db_max_connections)
        .connect_timeout(config.db_timeout);
    let db = Database::new(db_config)
        .await
        .with_context(|| format!("opening {}", config.db_path.display()))?;

    if !db.health_check().await {
        anyhow::bail!("database {} is not responding", config.db_path.display());
    }

    info!(
        catalog = ?config.catalog,
        path = %config.db_path.display(),
        "Database ready"
    );
    Ok(db)
}
