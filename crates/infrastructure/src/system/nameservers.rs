use massresolve_domain::DomainError;
use resolv_conf::ScopedIp;
use std::net::{SocketAddr, SocketAddrV6};
use tracing::debug;

const RESOLV_CONF_PATH: &str = "/etc/resolv.conf";
const DNS_PORT: u16 = 53;

/// `nameserver` entries of a resolv.conf, in file order, on port 53.
pub fn parse_nameservers(content: &[u8]) -> Result<Vec<SocketAddr>, DomainError> {
    let config = resolv_conf::Config::parse(content).map_err(|e| {
        DomainError::SetupFailed(format!("cannot parse {}: {}", RESOLV_CONF_PATH, e))
    })?;

    Ok(config.nameservers.into_iter().map(socket_addr).collect())
}

fn socket_addr(nameserver: ScopedIp) -> SocketAddr {
    match nameserver {
        ScopedIp::V4(ip) => SocketAddr::new(ip.into(), DNS_PORT),
        ScopedIp::V6(ip, scope) => {
            // Interface names need a lookup we do not do; numeric zones are kept
            let scope_id = scope.as_deref().and_then(|s| s.parse().ok()).unwrap_or_else(|| {
                if let Some(zone) = &scope {
                    debug!(nameserver = %ip, zone = %zone, "Ignoring non-numeric zone");
                }
                0
            });
            SocketAddr::V6(SocketAddrV6::new(ip, DNS_PORT, 0, scope_id))
        }
    }
}

/// Nameservers of the host, read from /etc/resolv.conf.
pub fn system_nameservers() -> Result<Vec<SocketAddr>, DomainError> {
    let content = std::fs::read(RESOLV_CONF_PATH).map_err(|e| {
        DomainError::SetupFailed(format!("cannot read {}: {}", RESOLV_CONF_PATH, e))
    })?;
    parse_nameservers(&content)
}
