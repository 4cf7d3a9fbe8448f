pub mod tcp;
pub mod udp;

use async_trait::async_trait;
use massresolve_domain::DomainError;
use std::time::Duration;

pub use tcp::TcpTransport;
pub use udp::UdpTransport;

/// Result of a raw DNS transport operation
#[derive(Debug)]
pub struct TransportResponse {
    /// Raw DNS response bytes (wire format)
    pub bytes: Vec<u8>,
    /// Which protocol was used
    pub protocol_used: &'static str,
    /// TC bit of the response header
    pub truncated: bool,
}

/// TC bit in the third header byte
const TC_FLAG: u8 = 0x02;

/// Whether a wire-format response has the TC (truncated) bit set.
pub fn is_truncated(response: &[u8]) -> bool {
    response.get(2).is_some_and(|flags| flags & TC_FLAG != 0)
}

/// Trait for sending raw DNS messages over the wire
#[async_trait]
pub trait DnsTransport: Send + Sync {
    /// Send `message_bytes` and wait for the response carrying `message_id`.
    async fn send(
        &self,
        message_bytes: &[u8],
        message_id: u16,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}
