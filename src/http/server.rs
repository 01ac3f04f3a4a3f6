//! HTTP server startup logic.
//!
//! One plain-TCP listener serves both HTTP/1.1 and cleartext HTTP/2. axum's
//! connection builder inspects the first bytes of each connection and switches
//! to HTTP/2 when it sees the client preface (prior knowledge).

use std::io;
use std::net::SocketAddr;

use axum::Router;
use socket2::{Domain, Protocol, Socket, Type};
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::error::ServerError;

/// Listen backlog for the accept queue
const LISTEN_BACKLOG: i32 = 1024;

/// Bind the listener for the configured address.
///
/// An IPv6 address is bound dual-stack, so the `::` wildcard also accepts
/// IPv4 clients.
pub async fn bind(config: &ServerConfig) -> Result<TcpListener, ServerError> {
    let addr = config.socket_addr()?;

    listen_socket(&addr)
        .and_then(|socket| TcpListener::from_std(socket.into()))
        .map_err(|source| ServerError::Bind { addr, source })
}

fn listen_socket(addr: &SocketAddr) -> io::Result<Socket> {
    let domain = if addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    // Accept IPv4-mapped peers regardless of the net.ipv6.bindv6only default
    if addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }

    // SO_REUSEADDR - allow rebinding over TIME_WAIT; still fails against a live listener
    #[cfg(unix)]
    socket.set_reuse_address(true)?;

    socket.bind(&(*addr).into())?;
    socket.listen(LISTEN_BACKLOG)?;
    socket.set_nonblocking(true)?;

    Ok(socket)
}

/// Run the accept loop on an already bound listener.
///
/// Each connection is served on its own task. This only returns if the
/// accept loop fails.
pub async fn serve(listener: TcpListener, app: Router) -> Result<(), ServerError> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "Serving HTTP/1.1 and h2c");
    }

    axum::serve(listener, app).await?;
    Ok(())
}

/// Bind the configured address and serve `app` on it.
///
/// This function blocks until the server fails.
pub async fn start_server(app: Router, config: &ServerConfig) -> Result<(), ServerError> {
    let listener = bind(config).await?;
    serve(listener, app).await
}
