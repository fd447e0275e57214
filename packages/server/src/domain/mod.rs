//! Domain layer for the broadcast relay.
//!
//! This module contains the history buffer, the client model and the
//! registry port. It is independent of axum and of the registry's
//! concrete implementation.

pub mod entity;
pub mod error;
pub mod factory;
pub mod history;
pub mod registry;
pub mod value_object;

pub use entity::{Client, DEFAULT_OUTBOUND_QUEUE_CAPACITY};
pub use error::{RegistryError, ValueObjectError};
pub use factory::ClientIdFactory;
pub use history::{DEFAULT_HISTORY_CAPACITY, HistoryBuffer};
pub use registry::ClientRegistry;
pub use value_object::{ClientId, MessagePayload};
