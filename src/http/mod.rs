//! HTTP server module.
//!
//! Plain HTTP only: no TLS, no redirect listener, no graceful shutdown. The
//! process serves until the listener fails or it is killed.

mod server;

pub use server::{bind, serve, start_server};
