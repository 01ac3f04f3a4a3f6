use std::io;
use std::net::SocketAddr;

/// Server startup or runtime failure.
///
/// This is the only error the crate produces. Every variant is fatal to the
/// process; callers log it and exit.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Invalid listen address: {0}")]
    InvalidAddress(String),

    #[error("Failed to bind server to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    #[error("Server error: {0}")]
    Serve(#[from] io::Error),
}

impl ServerError {
    /// The underlying io error kind, if any.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            ServerError::InvalidAddress(_) => None,
            ServerError::Bind { source, .. } => Some(source.kind()),
            ServerError::Serve(e) => Some(e.kind()),
        }
    }
}
