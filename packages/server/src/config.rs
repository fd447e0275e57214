//! Command-line configuration.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use clap::Parser;

use crate::domain::DEFAULT_HISTORY_CAPACITY;

/// Default listening port
pub const DEFAULT_PORT: u16 = 3000;

/// Server configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "hibiki-server", version, about = "WebSocket broadcast relay with recent history")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, default_value_t = IpAddr::V4(Ipv4Addr::UNSPECIFIED))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(short, long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Number of recent messages kept in history (0 disables history)
    #[arg(short = 's', long = "history-size", default_value_t = DEFAULT_HISTORY_CAPACITY)]
    pub history_size: usize,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
            history_size: DEFAULT_HISTORY_CAPACITY,
            log_level: "info".to_string(),
        }
    }
}
