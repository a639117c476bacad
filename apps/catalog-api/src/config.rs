//! Catalog server configuration module.
//!
//! Configuration is loaded from environment variables with fallback to
//! defaults. Each catalog reads its own prefix (`RACING_`, `SPORTS_`).
//!
//! | Variable                   | Default            |
//! |----------------------------|--------------------|
//! | `RACING_GRPC_ADDR`         | `127.0.0.1:9000`   |
//! | `RACING_DB_PATH`           | `./db/racing.db`   |
//! | `RACING_DB_MAX_CONNECTIONS`| `5`                |
//! | `RACING_DB_TIMEOUT_SECS`   | `30`               |
//! | `SPORTS_GRPC_ADDR`         | `127.0.0.1:9999`   |
//! | `SPORTS_DB_PATH`           | `./db/events.db`   |
//! | `SPORTS_DB_MAX_CONNECTIONS`| `5`                |
//! | `SPORTS_DB_TIMEOUT_SECS`   | `30`               |

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// Which catalog a server instance serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Catalog {
    Racing,
    Sports,
}

impl Catalog {
    /// Environment variable prefix.
    pub const fn env_prefix(&self) -> &'static str {
        match self {
            Catalog::Racing => "RACING",
            Catalog::Sports => "SPORTS",
        }
    }

    const fn default_addr(&self) -> &'static str {
        match self {
            Catalog::Racing => "127.0.0.1:9000",
            Catalog::Sports => "127.0.0.1:9999",
        }
    }

    const fn default_db_path(&self) -> &'static str {
        match self {
            Catalog::Racing => "./db/racing.db",
            Catalog::Sports => "./db/events.db",
        }
    }
}

/// Catalog server configuration.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Catalog served by this instance
    pub catalog: Catalog,

    /// gRPC listen address
    pub grpc_addr: SocketAddr,

    /// SQLite database file
    pub db_path: PathBuf,

    /// Connection pool size
    pub db_max_connections: u32,

    /// How long a query waits for a pooled connection
    pub db_timeout: Duration,
}

impl CatalogConfig {
    /// Load configuration from environment variables.
    pub fn load(catalog: Catalog) -> Result<Self, ConfigError> {
        Self::load_from(catalog, |name| env::var(name).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn load_from(
        catalog: Catalog,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        let prefix = catalog.env_prefix();
        let addr_var = format!("{prefix}_GRPC_ADDR");
        let path_var = format!("{prefix}_DB_PATH");
        let max_var = format!("{prefix}_DB_MAX_CONNECTIONS");
        let timeout_var = format!("{prefix}_DB_TIMEOUT_SECS");

        let config = CatalogConfig {
            catalog,

            grpc_addr: lookup(&addr_var)
                .unwrap_or_else(|| catalog.default_addr().to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue(addr_var.clone()))?,

            db_path: lookup(&path_var)
                .unwrap_or_else(|| catalog.default_db_path().to_string())
                .into(),

            db_max_connections: lookup(&max_var)
                .unwrap_or_else(|| "5".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue(max_var.clone()))?,

            db_timeout: lookup(&timeout_var)
                .unwrap_or_else(|| "30".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue(timeout_var.clone()))?,
        };

        if config.db_max_connections == 0 {
            return Err(ConfigError::InvalidValue(max_var));
        }

        Ok(config)
    }
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
