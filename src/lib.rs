//! Pulse: a minimal HTTP server.
//!
//! Serves `GET /` with a plain-text `ok` over HTTP/1.1 and cleartext HTTP/2 on
//! a fixed port. The library exposes the router and the server entry points so
//! the binary and the integration tests share one code path.

pub mod config;
pub mod error;
pub mod http;
pub mod middleware;
pub mod routes;

pub use error::ServerError;
pub use http::start_server;
pub use routes::create_router;
