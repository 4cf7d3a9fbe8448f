use super::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};

/// Resolver service configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResolverConfig {
    /// Recursive resolvers to forward to ("9.9.9.9", "127.0.0.1:5353", "[::1]:53").
    /// Empty means: use the nameservers listed in /etc/resolv.conf.
    #[serde(default)]
    pub upstreams: Vec<String>,

    #[serde(default = "default_query_timeout")]
    pub query_timeout_ms: u64,

    /// Tries per query, spread round-robin over the upstreams
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Runtime worker threads completions are delivered from
    #[serde(default = "default_worker_threads")]
    pub worker_threads: usize,

    /// Outstanding submissions above this are rejected
    #[serde(default = "default_max_pending")]
    pub max_pending: usize,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            upstreams: Vec::new(),
            query_timeout_ms: default_query_timeout(),
            attempts: default_attempts(),
            worker_threads: default_worker_threads(),
            max_pending: default_max_pending(),
        }
    }
}

impl ResolverConfig {
    /// Parses the configured upstreams, defaulting the port to 53.
    pub fn upstream_addrs(&self) -> Result<Vec<SocketAddr>, ConfigError> {
        self.upstreams
            .iter()
            .map(|s| parse_upstream(s))
            .collect()
    }
}

pub fn parse_upstream(value: &str) -> Result<SocketAddr, ConfigError> {
    let value = value.trim();
    if let Ok(addr) = value.parse::<SocketAddr>() {
        return Ok(addr);
    }
    value
        .parse::<IpAddr>()
        .map(|ip| SocketAddr::new(ip, 53))
        .map_err(|_| ConfigError::InvalidUpstream(value.to_string()))
}

fn default_query_timeout() -> u64 {
    2000
}

fn default_attempts() -> u32 {
    2
}

fn default_worker_threads() -> usize {
    8
}

fn default_max_pending() -> usize {
    4096
}
