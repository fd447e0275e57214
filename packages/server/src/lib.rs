//! Broadcast relay library.
//!
//! Clients connect over WebSocket; every message one client sends is fanned
//! out to all connected clients, and a bounded history lets newcomers
//! catch up over HTTP.

pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod ui;
pub mod usecase;

// Re-export entry points
pub use config::ServerConfig;
pub use error::ServerError;
pub use ui::{run as run_server, serve};
