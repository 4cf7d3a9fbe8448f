use crate::{DnsQuery, DomainError};
use bytes::Bytes;

/// Result of one resolution as reported by the resolver service.
#[derive(Debug, Clone)]
pub enum Outcome {
    /// Raw answer packet in wire format
    Success(Bytes),
    Failure(DomainError),
}

/// Delivered exactly once per accepted submission.
#[derive(Debug, Clone)]
pub struct CompletionEvent {
    pub query: DnsQuery,
    pub outcome: Outcome,
}

impl CompletionEvent {
    pub fn success(query: DnsQuery, packet: impl Into<Bytes>) -> Self {
        Self {
            query,
            outcome: Outcome::Success(packet.into()),
        }
    }

    pub fn failure(query: DnsQuery, error: DomainError) -> Self {
        Self {
            query,
            outcome: Outcome::Failure(error),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.outcome, Outcome::Success(_))
    }
}
