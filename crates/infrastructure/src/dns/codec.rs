use hickory_proto::op::Message;
use hickory_proto::rr::RData;
use massresolve_application::ports::{DecodedRecord, DnsCodec};
use massresolve_domain::{DomainError, RecordType, ValueKind};
use std::fmt::Write;
use std::sync::Arc;
use tracing::debug;

/// Answer codec backed by `hickory-proto`.
#[derive(Debug, Clone, Copy, Default)]
pub struct HickoryCodec;

impl HickoryCodec {
    pub fn new() -> Self {
        Self
    }
}

impl DnsCodec for HickoryCodec {
    type Value = RData;

    fn decode(&self, packet: &[u8]) -> Result<Vec<DecodedRecord<RData>>, DomainError> {
        let message =
            Message::from_vec(packet).map_err(|e| DomainError::DecodeFailed(e.to_string()))?;

        debug!(
            rcode = ?message.response_code(),
            answers = message.answers().len(),
            truncated = message.truncated(),
            "DNS answer decoded"
        );

        Ok(message
            .answers()
            .iter()
            .map(|record| DecodedRecord {
                owner: Arc::from(record.name().to_utf8().as_str()),
                type_code: u16::from(record.record_type()),
                ttl: record.ttl(),
                value: record.data().clone(),
            })
            .collect())
    }

    fn render_value(&self, record_type: RecordType, value: &RData) -> Result<String, DomainError> {
        let rendered = match (record_type.value_kind(), value) {
            (ValueKind::Address, RData::A(a)) => Some(a.0.to_string()),
            (ValueKind::Address, RData::AAAA(aaaa)) => Some(aaaa.0.to_string()),
            // All character-strings of the record are rendered, not only the first.
            (ValueKind::Text, RData::TXT(txt)) => Some(
                txt.txt_data()
                    .iter()
                    .map(|s| quote_character_string(s))
                    .collect::<Vec<_>>()
                    .join(" "),
            ),
            (ValueKind::Name, RData::NS(ns)) => Some(ns.to_utf8()),
            (ValueKind::Name, RData::CNAME(cname)) => Some(cname.to_utf8()),
            (ValueKind::Name, RData::PTR(ptr)) => Some(ptr.to_utf8()),
            _ => None,
        };

        rendered.ok_or_else(|| {
            DomainError::DecodeFailed(format!(
                "{} record carries unexpected data: {}",
                record_type, value
            ))
        })
    }
}

/// Presentation form of a character-string: quoted, with `"` and `\`
/// escaped and non-printable bytes as `\DDD`.
pub fn quote_character_string(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() + 2);
    out.push('"');
    for &b in bytes {
        match b {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(b as char);
            }
            0x20..=0x7e => out.push(b as char),
            _ => {
                let _ = write!(out, "\\{:03}", b);
            }
        }
    }
    out.push('"');
    out
}
