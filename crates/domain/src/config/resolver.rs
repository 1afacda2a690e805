use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransportProtocol {
    #[default]
    Udp,
    Tcp,
}

impl TransportProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransportProtocol::Udp => "UDP",
            TransportProtocol::Tcp => "TCP",
        }
    }
}

/// Recursive resolver the checks are sent to.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// IP address, `ip:port`, or host name (default: "8.8.8.8")
    #[serde(default = "default_nameserver")]
    pub nameserver: String,

    /// Used when `nameserver` carries no port
    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default)]
    pub protocol: TransportProtocol,

    /// Per-exchange timeout in milliseconds
    #[serde(default = "default_query_timeout_ms")]
    pub query_timeout_ms: u64,

    /// Budget for the whole check in milliseconds
    #[serde(default = "default_deadline_ms")]
    pub deadline_ms: u64,

    /// EDNS0 UDP payload size advertised on every query
    #[serde(default = "default_edns_payload")]
    pub edns_payload: u16,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            nameserver: default_nameserver(),
            port: default_port(),
            protocol: TransportProtocol::default(),
            query_timeout_ms: default_query_timeout_ms(),
            deadline_ms: default_deadline_ms(),
            edns_payload: default_edns_payload(),
        }
    }
}

impl ResolverConfig {
    pub fn query_timeout(&self) -> Duration {
        Duration::from_millis(self.query_timeout_ms)
    }

    pub fn deadline(&self) -> Duration {
        Duration::from_millis(self.deadline_ms)
    }
}

fn default_nameserver() -> String {
    "8.8.8.8".to_string()
}

fn default_port() -> u16 {
    53
}

fn default_query_timeout_ms() -> u64 {
    3000
}

fn default_deadline_ms() -> u64 {
    30_000
}

fn default_edns_payload() -> u16 {
    4096
}
