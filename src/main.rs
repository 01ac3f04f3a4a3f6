//! Pulse: a minimal HTTP server.
//!
//! This is the application entry point. It takes no arguments and reads no
//! environment: it initializes tracing with a fixed filter, prints the startup
//! banner, and serves the router on the fixed port. Any server error is fatal:
//! it is logged and the process exits with a failure status.

use std::process::ExitCode;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pulse::config::{ServerConfig, BIND_ADDR, DEFAULT_LOG_FILTER, STARTUP_BANNER};
use pulse::{create_router, start_server};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr; stdout only carries the startup banner
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ServerConfig::default();
    let app = create_router();

    println!("{STARTUP_BANNER}");
    tracing::info!(addr = BIND_ADDR, "Starting server");

    match start_server(app, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, kind = ?e.io_kind(), "Server failed");
            ExitCode::FAILURE
        }
    }
}
