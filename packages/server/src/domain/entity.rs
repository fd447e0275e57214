//! Core domain models for the broadcast relay.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use super::{ClientId, ClientIdFactory, MessagePayload};

/// Default capacity of each client's outbound queue
pub const DEFAULT_OUTBOUND_QUEUE_CAPACITY: usize = 256;

/// One connected peer as seen by the registry.
///
/// Holds the producer side of the client's outbound queue. The consumer side
/// is returned from [`Client::new`] and owned by the client's writer task.
/// Dropping the last `Client` for an id closes that queue.
#[derive(Debug)]
pub struct Client {
    /// Client identifier
    pub id: ClientId,
    /// Producer side of the outbound queue
    pub outbound: mpsc::Sender<MessagePayload>,
    /// When the connection was accepted
    pub connected_at: DateTime<Utc>,
}

impl Client {
    /// Create a client with a fresh id and a bounded outbound queue.
    ///
    /// # Returns
    ///
    /// The client record and the receiving end of its outbound queue
    pub fn new(queue_capacity: usize) -> (Self, mpsc::Receiver<MessagePayload>) {
        // mpsc::channel panics on zero capacity
        let (outbound, receiver) = mpsc::channel(queue_capacity.max(1));
        let client = Self {
            id: ClientIdFactory::generate(),
            outbound,
            connected_at: Utc::now(),
        };
        (client, receiver)
    }
}
