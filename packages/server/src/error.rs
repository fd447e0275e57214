//! Server-level error definitions.

use std::{io, net::SocketAddr};

use thiserror::Error;

/// Errors that stop the server
#[derive(Debug, Error)]
pub enum ServerError {
    /// The listening socket could not be bound
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: io::Error,
    },

    /// I/O error while serving
    #[error("server I/O error: {0}")]
    Io(#[from] io::Error),
}
