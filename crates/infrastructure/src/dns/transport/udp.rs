use super::{is_truncated, DnsTransport, TransportResponse};
use crate::dns::forwarding::EDNS_PAYLOAD_SIZE;
use async_trait::async_trait;
use massresolve_domain::DomainError;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Maximum UDP DNS response size; matches the EDNS(0) payload size we advertise
const MAX_UDP_RESPONSE_SIZE: usize = EDNS_PAYLOAD_SIZE as usize;

/// DNS over UDP transport; one ephemeral socket per query.
pub struct UdpTransport {
    server_addr: SocketAddr,
}

impl UdpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    async fn exchange(
        &self,
        socket: &UdpSocket,
        message_bytes: &[u8],
        message_id: u16,
    ) -> Result<Vec<u8>, DomainError> {
        let bytes_sent = socket
            .send_to(message_bytes, self.server_addr)
            .await
            .map_err(|e| {
                DomainError::IoError(format!(
                    "Failed to send UDP query to {}: {}",
                    self.server_addr, e
                ))
            })?;

        debug!(server = %self.server_addr, bytes_sent = bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
        loop {
            let (bytes_received, from_addr) =
                socket.recv_from(&mut recv_buf).await.map_err(|e| {
                    DomainError::IoError(format!(
                        "Failed to receive UDP response from {}: {}",
                        self.server_addr, e
                    ))
                })?;

            // Validate response came from expected server
            if from_addr != self.server_addr {
                warn!(
                    expected = %self.server_addr,
                    received_from = %from_addr,
                    "UDP response from unexpected source"
                );
                continue;
            }

            if bytes_received < 2 || u16::from_be_bytes([recv_buf[0], recv_buf[1]]) != message_id {
                debug!(server = %self.server_addr, "Discarding response with mismatched ID");
                continue;
            }

            recv_buf.truncate(bytes_received);

            debug!(
                server = %self.server_addr,
                bytes_received = bytes_received,
                "UDP response received"
            );
            return Ok(recv_buf);
        }
    }
}

#[async_trait]
impl DnsTransport for UdpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        message_id: u16,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        // Bind to ephemeral port (0 = OS assigns)
        let bind_addr: SocketAddr = if self.server_addr.is_ipv4() {
            SocketAddr::from((Ipv4Addr::UNSPECIFIED, 0))
        } else {
            SocketAddr::from((Ipv6Addr::UNSPECIFIED, 0))
        };

        let socket = UdpSocket::bind(bind_addr)
            .await
            .map_err(|e| DomainError::IoError(format!("Failed to bind UDP socket: {}", e)))?;

        let bytes = tokio::time::timeout(
            timeout,
            self.exchange(&socket, message_bytes, message_id),
        )
        .await
        .map_err(|_| DomainError::QueryTimeout)??;

        Ok(TransportResponse {
            truncated: is_truncated(&bytes),
            bytes,
            protocol_used: "UDP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "UDP"
    }
}
