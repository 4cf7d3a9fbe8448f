use super::{is_truncated, DnsTransport, TransportResponse};
use async_trait::async_trait;
use massresolve_domain::DomainError;
use std::net::SocketAddr;
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::debug;

/// DNS over TCP transport (RFC 1035 §4.2.2 two-byte length framing); one
/// connection per query. Used when a UDP answer comes back truncated.
pub struct TcpTransport {
    server_addr: SocketAddr,
}

impl TcpTransport {
    pub fn new(server_addr: SocketAddr) -> Self {
        Self { server_addr }
    }

    pub fn server_addr(&self) -> SocketAddr {
        self.server_addr
    }

    async fn exchange(&self, message_bytes: &[u8], message_id: u16) -> Result<Vec<u8>, DomainError> {
        let io_error = |what: &str, e: std::io::Error| {
            DomainError::IoError(format!("TCP {} {} failed: {}", what, self.server_addr, e))
        };

        let mut stream = TcpStream::connect(self.server_addr)
            .await
            .map_err(|e| io_error("connect to", e))?;

        let length = u16::try_from(message_bytes.len()).map_err(|_| {
            DomainError::IoError(format!("DNS message too large for TCP: {} bytes", message_bytes.len()))
        })?;

        let mut framed = Vec::with_capacity(message_bytes.len() + 2);
        framed.extend_from_slice(&length.to_be_bytes());
        framed.extend_from_slice(message_bytes);
        stream
            .write_all(&framed)
            .await
            .map_err(|e| io_error("write to", e))?;

        debug!(server = %self.server_addr, bytes_sent = framed.len(), "TCP query sent");

        let mut length_buf = [0u8; 2];
        stream
            .read_exact(&mut length_buf)
            .await
            .map_err(|e| io_error("read from", e))?;

        let mut response = vec![0u8; u16::from_be_bytes(length_buf) as usize];
        stream
            .read_exact(&mut response)
            .await
            .map_err(|e| io_error("read from", e))?;

        if response.len() < 2 || u16::from_be_bytes([response[0], response[1]]) != message_id {
            return Err(DomainError::IoError(format!(
                "TCP response from {} has mismatched ID",
                self.server_addr
            )));
        }

        debug!(server = %self.server_addr, bytes_received = response.len(), "TCP response received");
        Ok(response)
    }
}

#[async_trait]
impl DnsTransport for TcpTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        message_id: u16,
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let bytes = tokio::time::timeout(timeout, self.exchange(message_bytes, message_id))
            .await
            .map_err(|_| DomainError::QueryTimeout)??;

        Ok(TransportResponse {
            truncated: is_truncated(&bytes),
            bytes,
            protocol_used: "TCP",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TCP"
    }
}
