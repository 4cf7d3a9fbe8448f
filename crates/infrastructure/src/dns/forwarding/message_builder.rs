//! DNS Message Builder
//!
//! Constructs DNS query messages in wire format using `hickory-proto`.

use super::record_type_map::RecordTypeMapper;
use super::reverse::query_name_for;
use hickory_proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use massresolve_domain::{DnsQuery, DomainError};
use std::str::FromStr;

/// UDP payload size advertised through EDNS(0)
pub const EDNS_PAYLOAD_SIZE: u16 = 4096;

/// Builds DNS query messages in wire format
pub struct MessageBuilder;

impl MessageBuilder {
    /// Build a recursive query for `query` and serialize it.
    ///
    /// Creates a standard recursive query with:
    /// - Random ID for request/response matching
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    /// - EDNS(0) OPT record advertising `EDNS_PAYLOAD_SIZE`
    ///
    /// Returns the message ID together with the wire bytes.
    pub fn build_query(query: &DnsQuery) -> Result<(u16, Vec<u8>), DomainError> {
        let wire_name = query_name_for(&query.name, query.record_type);
        let name = Name::from_str(&wire_name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", query.name, e))
        })?;

        let mut question = Query::new();
        question.set_name(name);
        question.set_query_type(RecordTypeMapper::to_hickory(query.record_type));
        question.set_query_class(RecordTypeMapper::class_to_hickory(query.record_class));

        let id = fastrand::u16(..);

        let mut message = Message::new(id, MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(question);

        let mut edns = Edns::new();
        edns.set_max_payload(EDNS_PAYLOAD_SIZE);
        message.set_edns(edns);

        let bytes = Self::serialize_message(&message)?;
        Ok((id, bytes))
    }

    /// Serialize a Message to wire format bytes
    fn serialize_message(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
