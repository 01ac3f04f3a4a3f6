//! Configuration constants and typed settings.
//!
//! The server has no runtime configuration: it always listens on
//! [`DEFAULT_HOST`]:[`DEFAULT_PORT`]. `ServerConfig` exists so the address can be
//! carried through the startup path as a value, and so tests can bind elsewhere.

use std::net::{IpAddr, SocketAddr};

use const_format::formatcp;

use crate::error::ServerError;

// =============================================================================
// Listener
// =============================================================================

/// Interface the server listens on (IPv6 wildcard, bound dual-stack so IPv4
/// clients are accepted too)
pub const DEFAULT_HOST: &str = "::";

/// Fixed TCP port
pub const DEFAULT_PORT: u16 = 8080;

/// Pre-formatted bind address, used in startup logs
pub const BIND_ADDR: &str = formatcp!("[{}]:{}", DEFAULT_HOST, DEFAULT_PORT);

/// Line printed to stdout right before entering the serve loop
pub const STARTUP_BANNER: &str = "Starting Server..";

// =============================================================================
// Routes
// =============================================================================

/// The only registered path
pub const INDEX_PATH: &str = "/";

/// Body returned by the index handler
pub const INDEX_BODY: &str = "ok";

// =============================================================================
// Logging
// =============================================================================

/// Log filter installed at startup
pub const DEFAULT_LOG_FILTER: &str = "pulse=info";

/// Listener settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    /// Resolve host and port into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ServerError> {
        let ip: IpAddr = self
            .host
            .parse()
            .map_err(|e| ServerError::InvalidAddress(format!("{}: {e}", self.host)))?;
        Ok(SocketAddr::new(ip, self.port))
    }
}
