use super::RecordType;
use std::fmt;
use std::sync::Arc;

/// One matching resource record, ready to be written as an output line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAnswer {
    /// Name as it was submitted (not the owner of a CNAME target)
    pub query_name: Arc<str>,
    pub record_type: RecordType,
    /// Rendered payload
    pub value: String,
    /// Time to live in seconds
    pub ttl: u32,
}

impl ResolvedAnswer {
    pub fn new(query_name: Arc<str>, record_type: RecordType, value: String, ttl: u32) -> Self {
        Self {
            query_name,
            record_type,
            value,
            ttl,
        }
    }
}

/// `<name> <value> <ttl>` without the trailing newline.
impl fmt::Display for ResolvedAnswer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.query_name, self.value, self.ttl)
    }
}
