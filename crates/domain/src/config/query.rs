use crate::{RecordClass, RecordType};
use serde::{Deserialize, Serialize};

/// What every submitted query asks for, and how many may be in flight.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    /// Record type to resolve and extract (A, AAAA, TXT, NS, CNAME, PTR)
    #[serde(default = "default_record_type")]
    pub record_type: RecordType,

    #[serde(default)]
    pub record_class: RecordClass,

    /// Admission window size
    #[serde(default = "default_max_in_flight")]
    pub max_in_flight: usize,

    /// Name of the query that bootstraps the event loop
    #[serde(default = "default_seed_name")]
    pub seed_name: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            record_type: default_record_type(),
            record_class: RecordClass::default(),
            max_in_flight: default_max_in_flight(),
            seed_name: default_seed_name(),
        }
    }
}

fn default_record_type() -> RecordType {
    RecordType::A
}

fn default_max_in_flight() -> usize {
    640
}

fn default_seed_name() -> String {
    "nonexistent.example.com".to_string()
}
