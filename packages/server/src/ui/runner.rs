//! Server startup.

use std::{future::Future, sync::Arc};

use tokio::{net::TcpListener, sync::watch};

use crate::{config::ServerConfig, error::ServerError, infrastructure::registry::RegistryHandle};

use super::{router::create_router, signal::shutdown_signal, state::AppState};

/// Bind the configured address and serve until Ctrl-C / SIGTERM.
pub async fn run(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr();
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    serve(listener, config.history_size, shutdown_signal()).await
}

/// Serve on an already bound listener until `shutdown` resolves.
///
/// Spawns the registry loop, so this must run inside a tokio runtime.
/// When `shutdown` resolves, every open client connection is asked to close.
pub async fn serve<F>(
    listener: TcpListener,
    history_capacity: usize,
    shutdown: F,
) -> Result<(), ServerError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let registry = Arc::new(RegistryHandle::spawn(history_capacity));
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let state = Arc::new(AppState::new(registry, shutdown_rx));
    let app = create_router(state);

    let local_addr = listener.local_addr()?;
    tracing::info!(
        "Listening on {} (history capacity: {})",
        local_addr,
        history_capacity
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.await;
            tracing::info!("Shutting down, closing client connections");
            let _ = shutdown_tx.send(true);
        })
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
