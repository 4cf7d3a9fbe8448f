use massresolve_domain::{DomainError, RecordType};
use std::sync::Arc;

/// One resource record from the answer section of a decoded packet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord<V> {
    pub owner: Arc<str>,
    /// Wire type number; may be outside the supported set (e.g. RRSIG, DNAME)
    pub type_code: u16,
    pub ttl: u32,
    pub value: V,
}

impl<V> DecodedRecord<V> {
    pub fn record_type(&self) -> Option<RecordType> {
        RecordType::from_u16(self.type_code)
    }

    pub fn is_type(&self, record_type: RecordType) -> bool {
        self.type_code == record_type.to_u16()
    }
}

/// Wire-format decoder for answer packets.
pub trait DnsCodec: Send + Sync + 'static {
    /// Codec-specific record payload
    type Value: Send;

    /// Decode an answer packet into its answer records, in packet order.
    fn decode(&self, packet: &[u8]) -> Result<Vec<DecodedRecord<Self::Value>>, DomainError>;

    /// Render a payload as presentation text for `record_type`.
    fn render_value(&self, record_type: RecordType, value: &Self::Value)
        -> Result<String, DomainError>;
}
