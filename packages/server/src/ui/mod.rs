//! HTTP and WebSocket surface of the relay.

mod handler;
mod router;
mod runner;
mod signal;
pub mod state;

pub use router::create_router;
pub use runner::{run, serve};
