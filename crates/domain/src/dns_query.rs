use super::{RecordClass, RecordType};
use std::fmt;
use std::sync::Arc;

/// DNS query (name + record type + class).
/// Uses `Arc<str>` so the name is shared between the submission and its completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DnsQuery {
    pub name: Arc<str>,
    pub record_type: RecordType,
    pub record_class: RecordClass,
}

impl DnsQuery {
    pub fn new(name: impl Into<Arc<str>>, record_type: RecordType, record_class: RecordClass) -> Self {
        Self {
            name: name.into(),
            record_type,
            record_class,
        }
    }
}

impl fmt::Display for DnsQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.name, self.record_class, self.record_type)
    }
}
