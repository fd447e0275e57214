//! Shared application state.

use std::sync::Arc;

use tokio::sync::watch;

use crate::domain::{ClientRegistry, DEFAULT_OUTBOUND_QUEUE_CAPACITY};

/// Shared application state
pub struct AppState {
    /// Client registry (the single coordination point for fan-out)
    pub registry: Arc<dyn ClientRegistry>,
    /// Becomes `true` once the server starts shutting down
    pub shutdown: watch::Receiver<bool>,
    /// Capacity of each client's outbound queue
    pub outbound_queue_capacity: usize,
}

impl AppState {
    pub fn new(registry: Arc<dyn ClientRegistry>, shutdown: watch::Receiver<bool>) -> Self {
        Self {
            registry,
            shutdown,
            outbound_queue_capacity: DEFAULT_OUTBOUND_QUEUE_CAPACITY,
        }
    }
}
