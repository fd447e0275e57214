//! Client registry port.
//!
//! The use-case layer depends on this trait, not on the registry's
//! implementation (dependency inversion).

use async_trait::async_trait;

use super::{Client, ClientId, MessagePayload, RegistryError};

/// Single coordination point for membership, fan-out and history.
///
/// `register`, `unregister` and `broadcast` are submissions into the
/// registry's processing loop and return without waiting for it. The
/// async methods wait for the loop to answer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ClientRegistry: Send + Sync {
    /// Add a client to the active set
    fn register(&self, client: Client) -> Result<(), RegistryError>;

    /// Remove a client from the active set. Absent ids are a no-op.
    fn unregister(&self, client_id: ClientId);

    /// Append the payload to history and deliver it to every active client
    fn broadcast(&self, payload: MessagePayload) -> Result<(), RegistryError>;

    /// Snapshot of the history, oldest first
    async fn history(&self) -> Result<Vec<String>, RegistryError>;

    /// Remove every message from the history
    async fn clear_history(&self) -> Result<(), RegistryError>;

    /// Number of currently active clients
    async fn client_count(&self) -> Result<usize, RegistryError>;
}
