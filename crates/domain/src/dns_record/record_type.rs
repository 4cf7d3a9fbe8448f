use crate::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the payload of a record type is rendered to text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// IPv4 / IPv6 address literal
    Address,
    /// Character strings
    Text,
    /// A domain name pointing elsewhere
    Name,
}

/// Record types a run can be configured to extract.
///
/// The set is closed: anything else is rejected when the configuration is
/// parsed, never while answers are being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum RecordType {
    A,
    AAAA,
    TXT,
    NS,
    CNAME,
    PTR,
}

impl RecordType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordType::A => "A",
            RecordType::AAAA => "AAAA",
            RecordType::TXT => "TXT",
            RecordType::NS => "NS",
            RecordType::CNAME => "CNAME",
            RecordType::PTR => "PTR",
        }
    }

    /// Convert from wire format number (RFC 1035 / RFC 3596)
    ///
    /// Returns `None` for types outside the supported set.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(RecordType::A),
            2 => Some(RecordType::NS),
            5 => Some(RecordType::CNAME),
            12 => Some(RecordType::PTR),
            16 => Some(RecordType::TXT),
            28 => Some(RecordType::AAAA),
            _ => None,
        }
    }

    /// Convert to wire format number
    pub fn to_u16(&self) -> u16 {
        match self {
            RecordType::A => 1,
            RecordType::NS => 2,
            RecordType::CNAME => 5,
            RecordType::PTR => 12,
            RecordType::TXT => 16,
            RecordType::AAAA => 28,
        }
    }

    pub fn value_kind(&self) -> ValueKind {
        match self {
            RecordType::A | RecordType::AAAA => ValueKind::Address,
            RecordType::TXT => ValueKind::Text,
            RecordType::NS | RecordType::CNAME | RecordType::PTR => ValueKind::Name,
        }
    }

    pub fn all() -> [RecordType; 6] {
        [
            RecordType::A,
            RecordType::AAAA,
            RecordType::TXT,
            RecordType::NS,
            RecordType::CNAME,
            RecordType::PTR,
        ]
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "A" => Ok(RecordType::A),
            "AAAA" => Ok(RecordType::AAAA),
            "TXT" => Ok(RecordType::TXT),
            "NS" => Ok(RecordType::NS),
            "CNAME" => Ok(RecordType::CNAME),
            "PTR" => Ok(RecordType::PTR),
            _ => Err(ConfigError::UnsupportedRecordType(s.to_string())),
        }
    }
}

impl TryFrom<String> for RecordType {
    type Error = ConfigError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<RecordType> for String {
    fn from(value: RecordType) -> Self {
        value.as_str().to_string()
    }
}
