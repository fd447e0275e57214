//! Domain layer error definitions.

use thiserror::Error;

/// Errors related to Value Objects validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueObjectError {
    /// Binary payload that is not valid UTF-8 text
    #[error("MessagePayload must be valid UTF-8 (invalid byte at offset {valid_up_to})")]
    PayloadNotUtf8 { valid_up_to: usize },
}

/// Errors returned by the client registry port
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The registry's processing loop is no longer running
    #[error("client registry is not running")]
    Closed,
}
