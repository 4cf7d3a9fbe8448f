//! massresolve Domain Layer
pub mod completion;
pub mod config;
pub mod dns_query;
pub mod dns_record;
pub mod errors;
pub mod summary;

pub use completion::{CompletionEvent, Outcome};
pub use config::{CliOverrides, Config, ConfigError, ExtractRule};
pub use dns_query::DnsQuery;
pub use dns_record::{RecordClass, RecordType, ResolvedAnswer, ValueKind};
pub use errors::DomainError;
pub use summary::RunSummary;
