//! Bounded history of recent broadcast messages.
//!
//! The buffer holds no lock. It is owned by the registry's processing loop,
//! which is the only place that mutates or reads it.

use std::collections::VecDeque;

use super::MessagePayload;

/// Default number of messages kept in history
pub const DEFAULT_HISTORY_CAPACITY: usize = 100;

/// Upper bound on the slots reserved up front; larger buffers grow on demand
const MAX_PREALLOCATED_SLOTS: usize = 1024;

/// FIFO buffer of the most recent messages.
///
/// Never holds more than `capacity` entries. When full, pushing evicts the
/// oldest entry first. A capacity of zero disables history.
#[derive(Debug, Clone)]
pub struct HistoryBuffer {
    capacity: usize,
    messages: VecDeque<MessagePayload>,
}

impl HistoryBuffer {
    /// Create an empty buffer holding at most `capacity` messages
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            messages: VecDeque::with_capacity(capacity.min(MAX_PREALLOCATED_SLOTS)),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append `message` as the newest entry, evicting the oldest when full
    pub fn push(&mut self, message: MessagePayload) {
        if self.capacity == 0 {
            return;
        }
        while self.messages.len() >= self.capacity {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Copy of all held messages, oldest first
    pub fn snapshot(&self) -> Vec<String> {
        self.messages
            .iter()
            .map(|message| message.as_str().to_owned())
            .collect()
    }

    pub fn clear(&mut self) {
        self.messages.clear();
    }
}

impl Default for HistoryBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_HISTORY_CAPACITY)
    }
}
