//! The registry's processing loop.

use std::collections::HashMap;

use chrono::Utc;
use tokio::sync::mpsc::{self, error::TrySendError};

use crate::domain::{Client, ClientId, HistoryBuffer, MessagePayload};

use super::RegistryCommand;

/// Registered client plus delivery bookkeeping
#[derive(Debug)]
struct ClientEntry {
    client: Client,
    /// Payloads dropped because the outbound queue was full
    dropped: u64,
}

/// Outcome of one fan-out
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FanOutReport {
    pub delivered: usize,
    /// Dropped because the client's queue was full
    pub dropped: usize,
    /// Skipped because the client's queue was already closed
    pub closed: usize,
}

/// Owner of the active client set and the history buffer.
///
/// Runs as a single task; see [`RegistryActor::run`].
pub struct RegistryActor {
    clients: HashMap<ClientId, ClientEntry>,
    history: HistoryBuffer,
    receiver: mpsc::UnboundedReceiver<RegistryCommand>,
}

impl RegistryActor {
    pub fn new(history_capacity: usize, receiver: mpsc::UnboundedReceiver<RegistryCommand>) -> Self {
        Self {
            clients: HashMap::new(),
            history: HistoryBuffer::new(history_capacity),
            receiver,
        }
    }

    /// Process commands until every handle has been dropped.
    pub async fn run(mut self) {
        tracing::debug!(
            "Registry loop started (history capacity: {})",
            self.history.capacity()
        );
        while let Some(command) = self.receiver.recv().await {
            self.handle(command);
        }
        tracing::debug!("Registry loop stopped: no handles left");
    }

    pub(crate) fn handle(&mut self, command: RegistryCommand) {
        match command {
            RegistryCommand::Register(client) => self.register(client),
            RegistryCommand::Unregister(client_id) => self.unregister(&client_id),
            RegistryCommand::Broadcast(payload) => {
                self.broadcast(payload);
            }
            RegistryCommand::ClearHistory { respond_to } => {
                self.history.clear();
                tracing::info!("History cleared");
                let _ = respond_to.send(());
            }
            RegistryCommand::History { respond_to } => {
                let _ = respond_to.send(self.history.snapshot());
            }
            RegistryCommand::ClientCount { respond_to } => {
                let _ = respond_to.send(self.clients.len());
            }
        }
    }

    fn register(&mut self, client: Client) {
        let client_id = client.id;
        if self.clients.contains_key(&client_id) {
            // Keep the existing registration; the new record's queue closes on drop.
            tracing::warn!("Client '{}' is already registered, ignoring", client_id);
            return;
        }
        self.clients.insert(client_id, ClientEntry { client, dropped: 0 });
        tracing::info!("Client '{}' registered, remain: {}", client_id, self.clients.len());
    }

    fn unregister(&mut self, client_id: &ClientId) {
        let Some(entry) = self.clients.remove(client_id) else {
            tracing::debug!("Client '{}' is not registered, nothing to remove", client_id);
            return;
        };
        let session = Utc::now() - entry.client.connected_at;
        tracing::info!(
            "Client '{}' unregistered after {}s (dropped: {}), remain: {}",
            client_id,
            session.num_seconds(),
            entry.dropped,
            self.clients.len()
        );
        // `entry` drops here, closing the client's outbound queue.
    }

    fn broadcast(&mut self, payload: MessagePayload) -> FanOutReport {
        self.history.push(payload.clone());

        let mut report = FanOutReport::default();
        for (client_id, entry) in self.clients.iter_mut() {
            match entry.client.outbound.try_send(payload.clone()) {
                Ok(()) => report.delivered += 1,
                Err(TrySendError::Full(_)) => {
                    entry.dropped += 1;
                    report.dropped += 1;
                    tracing::warn!(
                        "Outbound queue of client '{}' is full, dropping message (total dropped: {})",
                        client_id,
                        entry.dropped
                    );
                }
                Err(TrySendError::Closed(_)) => {
                    report.closed += 1;
                    tracing::debug!("Outbound queue of client '{}' is closed, skipping", client_id);
                }
            }
        }
        tracing::debug!(
            "Broadcast {} bytes: delivered {}, dropped {}, closed {}",
            payload.len(),
            report.delivered,
            report.dropped,
            report.closed
        );
        report
    }
}
