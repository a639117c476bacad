//! Gateway configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                       | Default                  |
//! |--------------------------------|--------------------------|
//! | `GATEWAY_ADDR`                 | `127.0.0.1:8000`         |
//! | `RACING_GRPC_URL`              | `http://127.0.0.1:9000`  |
//! | `SPORTS_GRPC_URL`              | `http://127.0.0.1:9999`  |
//! | `GATEWAY_CONNECT_TIMEOUT_SECS` | `10`                     |

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP listen address
    pub addr: SocketAddr,

    /// Racing server endpoint
    pub racing_url: String,

    /// Sports server endpoint
    pub sports_url: String,

    /// Timeout for establishing a backend connection
    pub connect_timeout: Duration,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(|name| env::var(name).ok())
    }

    /// Load configuration through `lookup` instead of the process environment.
    pub fn load_from(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let config = GatewayConfig {
            addr: lookup("GATEWAY_ADDR")
                .unwrap_or_else(|| "127.0.0.1:8000".to_string())
                .parse()
                .map_err(|_| ConfigError::InvalidValue("GATEWAY_ADDR".to_string()))?,

            racing_url: lookup("RACING_GRPC_URL")
                .unwrap_or_else(|| "http://127.0.0.1:9000".to_string()),

            sports_url: lookup("SPORTS_GRPC_URL")
                .unwrap_or_else(|| "http://127.0.0.1:9999".to_string()),

            connect_timeout: lookup("GATEWAY_CONNECT_TIMEOUT_SECS")
                .unwrap_or_else(|| "10".to_string())
                .parse()
                .map(Duration::from_secs)
                .map_err(|_| ConfigError::InvalidValue("GATEWAY_CONNECT_TIMEOUT_SECS".to_string()))?,
        };

        for (name, url) in [
            ("RACING_GRPC_URL", &config.racing_url),
            ("SPORTS_GRPC_URL", &config.sports_url),
        ] {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(ConfigError::InvalidValue(name.to_string()));
            }
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
