//! Domain factories for creating domain entities and value objects.

use super::ClientId;

/// Factory for generating ClientId instances.
///
/// This factory encapsulates the logic for generating new client identifiers,
/// separating the generation concern from the ClientId value object.
pub struct ClientIdFactory;

impl ClientIdFactory {
    /// Generate a new ClientId with a random UUID v4.
    pub fn generate() -> ClientId {
        ClientId::from_uuid(uuid::Uuid::new_v4())
    }
}
