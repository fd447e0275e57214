//! Commands accepted by the registry's processing loop.

use tokio::sync::oneshot;

use crate::domain::{Client, ClientId, MessagePayload};

/// A single event in the registry's mailbox.
///
/// Commands are processed one at a time in arrival order.
#[derive(Debug)]
pub enum RegistryCommand {
    Register(Client),
    Unregister(ClientId),
    Broadcast(MessagePayload),
    /// Routed through the loop so the history buffer needs no lock
    ClearHistory {
        respond_to: oneshot::Sender<()>,
    },
    History {
        respond_to: oneshot::Sender<Vec<String>>,
    },
    ClientCount {
        respond_to: oneshot::Sender<usize>,
    },
}
