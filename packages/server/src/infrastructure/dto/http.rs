//! HTTP API response DTOs for the broadcast relay.

use serde::{Deserialize, Serialize};

/// Body of `GET /api/info_list` when the snapshot cannot be encoded
pub const EMPTY_HISTORY_JSON: &str = "[]";

/// Body of `GET /api/empty_info`
pub const HISTORY_CLEARED_MESSAGE: &str = "empty the info";

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthDto {
    pub status: String,
    /// Number of currently connected clients
    pub clients: usize,
}

/// Encode a history snapshot as a JSON array of strings.
///
/// Never fails: an encoding error degrades to an empty array.
pub fn encode_history(messages: &[String]) -> String {
    match serde_json::to_string(messages) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to encode history snapshot: {}", e);
            EMPTY_HISTORY_JSON.to_string()
        }
    }
}
